use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use dashboard_wireframes::generator::{self, DEFAULT_OUTPUT_DIR, FIGURE_BASE_NAME};
use sha2::{Digest, Sha256};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("wireframe_tests")
        .join(name);
    if dir.exists() {
        fs::remove_dir_all(&dir).expect("clear scratch directory");
    }
    dir
}

fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    fn scrub_segment(data: &mut [u8], tag: &[u8], terminator: u8) {
        let mut index = 0;
        while index + tag.len() < data.len() {
            if data[index..].starts_with(tag) {
                let mut cursor = index + tag.len();
                while cursor < data.len() {
                    let byte = data[cursor];
                    if byte == terminator {
                        break;
                    }
                    if terminator == b')' {
                        data[cursor] = b'0';
                    } else if !matches!(byte, b'<' | b'>' | b' ' | b'\n' | b'\r' | b'\t') {
                        data[cursor] = b'0';
                    }
                    cursor += 1;
                }
                index = cursor;
            } else {
                index += 1;
            }
        }
    }

    fn scrub_xml(data: &mut [u8], start: &[u8], end: &[u8]) {
        let mut offset = 0;
        while offset + start.len() < data.len() {
            if let Some(start_pos) = data[offset..]
                .windows(start.len())
                .position(|window| window == start)
            {
                let start_index = offset + start_pos + start.len();
                if let Some(end_pos) = data[start_index..]
                    .windows(end.len())
                    .position(|window| window == end)
                {
                    for byte in &mut data[start_index..start_index + end_pos] {
                        if !matches!(*byte, b'<' | b'>' | b'/' | b' ' | b'\n' | b'\r' | b'\t') {
                            *byte = b'0';
                        }
                    }
                    offset = start_index + end_pos + end.len();
                } else {
                    break;
                }
            } else {
                break;
            }
        }
    }

    let mut normalized = bytes.to_vec();
    scrub_segment(&mut normalized, b"/CreationDate(", b')');
    scrub_segment(&mut normalized, b"/ModDate(", b')');
    scrub_segment(&mut normalized, b"/ID[", b']');
    scrub_segment(&mut normalized, b"/Producer(", b')');
    scrub_xml(&mut normalized, b"<xmp:CreateDate>", b"</xmp:CreateDate>");
    scrub_xml(&mut normalized, b"<xmp:ModifyDate>", b"</xmp:ModifyDate>");
    scrub_xml(
        &mut normalized,
        b"<xmp:MetadataDate>",
        b"</xmp:MetadataDate>",
    );
    scrub_xml(
        &mut normalized,
        b"<xmpMM:DocumentID>",
        b"</xmpMM:DocumentID>",
    );
    scrub_xml(
        &mut normalized,
        b"<xmpMM:InstanceID>",
        b"</xmpMM:InstanceID>",
    );
    scrub_xml(&mut normalized, b"<xmpMM:VersionID>", b"</xmpMM:VersionID>");
    normalized
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let normalized = scrub_pdf(bytes);
    let digest = Sha256::digest(&normalized);
    digest.into()
}

#[test]
fn generator_writes_both_vector_files() {
    let dir = scratch_dir("generates");
    let figure = generator::generate(&dir).expect("generate figure");

    assert_eq!(figure.svg_path, dir.join(format!("{FIGURE_BASE_NAME}.svg")));
    assert_eq!(figure.pdf_path, dir.join(format!("{FIGURE_BASE_NAME}.pdf")));

    let svg = fs::read_to_string(&figure.svg_path).expect("read svg");
    assert!(svg.starts_with("<svg "), "missing SVG header");
    assert!(!svg.is_empty());

    let pdf = fs::read(&figure.pdf_path).expect("read pdf");
    assert!(pdf.starts_with(b"%PDF-"), "missing PDF magic");
    assert!(!pdf.is_empty());

    let entries = fs::read_dir(&dir).expect("list output directory").count();
    assert_eq!(entries, 2, "output directory must hold exactly two files");
}

#[test]
fn exported_svg_mentions_every_panel_title() {
    let dir = scratch_dir("svg_titles");
    let figure = generator::generate(&dir).expect("generate figure");
    let svg = fs::read_to_string(&figure.svg_path).expect("read svg");

    for title in [
        "Filters (global)",
        "Revenue (aggregated)",
        "Operating profit",
        "Operating margin",
        "Cash from ops",
        "Performance bridge (conceptual)",
        "Exceptions &amp; escalation queue",
        "Channel &amp; business unit comparison",
        "Trends (conceptual)",
    ] {
        assert!(svg.contains(title), "missing panel title: {title}");
    }
}

#[test]
fn binary_exits_cleanly_and_reports_both_saved_files() {
    let workdir = scratch_dir("binary_run");
    fs::create_dir_all(&workdir).expect("create working directory");

    let output = Command::new(env!("CARGO_BIN_EXE_dashboard_wireframes"))
        .current_dir(&workdir)
        .output()
        .expect("run the generator binary");

    assert!(
        output.status.success(),
        "binary failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    let saved: Vec<_> = stdout.lines().collect();
    assert_eq!(saved.len(), 2, "expected exactly two Saved: lines");
    for (line, extension) in saved.iter().zip(["svg", "pdf"]) {
        let expected = Path::new(DEFAULT_OUTPUT_DIR)
            .join(format!("{FIGURE_BASE_NAME}.{extension}"));
        assert_eq!(*line, format!("Saved: {}", expected.display()));
        assert!(
            workdir.join(expected).is_file(),
            "reported file is missing: {line}"
        );
    }
}

#[test]
fn regeneration_is_idempotent_and_deterministic() {
    let dir = scratch_dir("idempotent");

    let first = generator::generate(&dir).expect("first run");
    let svg_a = fs::read(&first.svg_path).expect("read svg");
    let pdf_a = fs::read(&first.pdf_path).expect("read pdf");

    // Second run must tolerate the existing directory and overwrite in place.
    let second = generator::generate(&dir).expect("second run");
    assert_eq!(first.svg_path, second.svg_path);
    assert_eq!(first.pdf_path, second.pdf_path);

    let svg_b = fs::read(&second.svg_path).expect("read svg");
    assert_eq!(svg_a, svg_b, "SVG output must be byte-identical");

    let pdf_b = fs::read(&second.pdf_path).expect("read pdf");
    assert_eq!(pdf_a.len(), pdf_b.len(), "PDF sizes should match");
    assert_eq!(
        normalized_hash(&pdf_a),
        normalized_hash(&pdf_b),
        "PDF renders must be deterministic after metadata normalization"
    );
}
