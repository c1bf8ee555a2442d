//! PDF export backend built on `printpdf`.
//!
//! The page is sized to the cropped content bounding box and drawn with the
//! builtin Helvetica fonts, so no font files need to be bundled.  Builtin
//! fonts are limited to WinAnsi glyphs; text is mapped to ASCII-safe
//! replacements before encoding.

use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};

use crate::canvas::{Canvas, Rect, Shape, TextBlock, ASCENT_FACTOR, LINE_HEIGHT_FACTOR, PT_TO_MM};
use crate::error::RenderError;
use crate::svg::EXPORT_PAD_MM;

/// Renders the canvas to PDF bytes.
///
/// `title` becomes the document title in the PDF metadata.
pub fn render_pdf(canvas: &Canvas, title: &str) -> Result<Vec<u8>, RenderError> {
    let bounds = canvas
        .content_bounds()
        .unwrap_or(Rect::new(0.0, 0.0, 1.0, 1.0));
    let width = bounds.w * canvas.width_mm() + 2.0 * EXPORT_PAD_MM;
    let height = bounds.h * canvas.height_mm() + 2.0 * EXPORT_PAD_MM;

    let (doc, page_index, layer_index) =
        PdfDocument::new(title, Mm(width), Mm(height), "wireframe");
    let layer = doc.get_page(page_index).get_layer(layer_index);

    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    // PDF user space shares the normalized y-up orientation.
    let map_x = |x: f64| (x - bounds.x) * canvas.width_mm() + EXPORT_PAD_MM;
    let map_y = |y: f64| (y - bounds.y) * canvas.height_mm() + EXPORT_PAD_MM;

    for shape in canvas.shapes() {
        match shape {
            Shape::Rect { rect, line_width } => {
                draw_outline(&layer, *line_width, rect, &map_x, &map_y);
            }
            Shape::Text(block) => {
                let font = if block.bold { &bold } else { &regular };
                draw_text(&layer, block, font, map_x(block.x), map_y(block.y));
            }
        }
    }

    let mut buffer = BufWriter::new(Vec::new());
    doc.save(&mut buffer)?;
    let bytes = buffer.into_inner().map_err(|err| err.into_error())?;
    log::debug!("rendered PDF of {} bytes", bytes.len());
    Ok(bytes)
}

fn draw_outline(
    layer: &PdfLayerReference,
    line_width: f64,
    rect: &Rect,
    map_x: &impl Fn(f64) -> f64,
    map_y: &impl Fn(f64) -> f64,
) {
    let corners = vec![
        (Point::new(Mm(map_x(rect.x)), Mm(map_y(rect.y))), false),
        (Point::new(Mm(map_x(rect.right())), Mm(map_y(rect.y))), false),
        (
            Point::new(Mm(map_x(rect.right())), Mm(map_y(rect.top()))),
            false,
        ),
        (Point::new(Mm(map_x(rect.x)), Mm(map_y(rect.top()))), false),
    ];

    layer.set_outline_thickness(line_width);
    layer.add_shape(Line {
        points: corners,
        is_closed: true,
        has_fill: false,
        has_stroke: true,
        is_clipping_path: false,
    });
}

fn draw_text(
    layer: &PdfLayerReference,
    block: &TextBlock,
    font: &IndirectFontRef,
    x: f64,
    y_top: f64,
) {
    let line_height = block.font_size * LINE_HEIGHT_FACTOR * PT_TO_MM;
    let ascent = block.font_size * ASCENT_FACTOR * PT_TO_MM;

    for (index, line) in block.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let baseline = y_top - ascent - index as f64 * line_height;
        layer.use_text(
            to_builtin_text(line),
            block.font_size,
            Mm(x),
            Mm(baseline),
            font,
        );
    }
}

/// Replaces characters the builtin PDF fonts cannot encode.
fn to_builtin_text(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for ch in line.chars() {
        match ch {
            '•' => out.push('-'),
            '—' | '–' => out.push('-'),
            '→' => out.push_str("->"),
            _ if ch.is_ascii() => out.push(ch),
            _ => out.push('?'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_canvas() -> Canvas {
        let mut canvas = Canvas::new(100.0, 100.0);
        canvas.draw_rect(Rect::new(0.1, 0.1, 0.8, 0.8), 1.5);
        canvas.draw_text(TextBlock::new(0.12, 0.85, "Sample panel", 11.0).bold());
        canvas.draw_text(TextBlock::new(0.12, 0.7, "• first\n• second", 9.0));
        canvas
    }

    #[test]
    fn output_carries_the_pdf_magic() {
        let bytes = render_pdf(&sample_canvas(), "sample").expect("render pdf");
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.len() > 100);
    }

    #[test]
    fn empty_canvas_renders_a_valid_document() {
        let bytes = render_pdf(&Canvas::new(100.0, 100.0), "empty").expect("render pdf");
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn builtin_text_substitutes_unsupported_glyphs() {
        assert_eq!(to_builtin_text("• Status"), "- Status");
        assert_eq!(to_builtin_text("channel → unit"), "channel -> unit");
        assert_eq!(to_builtin_text("Figure 1 — overview"), "Figure 1 - overview");
        assert_eq!(to_builtin_text("plain ascii"), "plain ascii");
        assert_eq!(to_builtin_text("ünsupported"), "?nsupported");
    }
}
