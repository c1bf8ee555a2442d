//! Top-level figure generation: builds the wireframe canvas and exports it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::canvas::{Canvas, TextBlock};
use crate::error::RenderError;
use crate::layout;
use crate::panel::draw_panel;
use crate::{pdf, svg};

/// Default directory the binary writes into.
pub const DEFAULT_OUTPUT_DIR: &str = "wireframes_out";

/// Base name shared by the exported SVG and PDF files.
pub const FIGURE_BASE_NAME: &str = "figure_1_cfo_1_finance_overview";

/// Paths of the files written by [`generate`].
pub struct GeneratedFigure {
    /// Path of the exported SVG file.
    pub svg_path: PathBuf,
    /// Path of the exported PDF file.
    pub pdf_path: PathBuf,
}

/// Builds the complete wireframe canvas from the static layout table.
///
/// Draw order matches the figure's reading order: outer frame, captions,
/// filter pane, KPI tiles, then the remaining panels.
pub fn build_figure() -> Canvas {
    let mut canvas = Canvas::new(layout::FIGURE_WIDTH_MM, layout::FIGURE_HEIGHT_MM);

    canvas.draw_rect(layout::FRAME, layout::FRAME_LINE_WIDTH);
    for caption in &layout::CAPTIONS {
        let mut block = TextBlock::new(caption.x, caption.y, caption.text, caption.font_size);
        if caption.bold {
            block = block.bold();
        }
        canvas.draw_text(block);
    }

    for panel in layout::panels() {
        draw_panel(
            &mut canvas,
            panel.rect,
            Some(panel.title),
            panel.body,
            panel.title_size,
            panel.body_size,
        );
    }

    canvas
}

/// Renders the wireframe and writes it as SVG and PDF under `output_dir`.
///
/// The directory is created if absent and existing output files are
/// overwritten.  Returns the paths of the two written files.
pub fn generate(output_dir: &Path) -> Result<GeneratedFigure, RenderError> {
    fs::create_dir_all(output_dir).map_err(|source| RenderError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let canvas = build_figure();
    log::debug!(
        "built figure canvas with {} shapes",
        canvas.shapes().len()
    );

    let svg_path = output_dir.join(format!("{FIGURE_BASE_NAME}.svg"));
    let pdf_path = output_dir.join(format!("{FIGURE_BASE_NAME}.pdf"));

    let svg_document = svg::render_svg(&canvas);
    fs::write(&svg_path, svg_document).map_err(|source| RenderError::WriteFile {
        path: svg_path.clone(),
        source,
    })?;

    let pdf_bytes = pdf::render_pdf(&canvas, FIGURE_BASE_NAME)?;
    fs::write(&pdf_path, pdf_bytes).map_err(|source| RenderError::WriteFile {
        path: pdf_path.clone(),
        source,
    })?;

    Ok(GeneratedFigure { svg_path, pdf_path })
}
