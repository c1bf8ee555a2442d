//! SVG export backend.
//!
//! Serializes a [`Canvas`] into a standalone SVG document.  The markup is
//! assembled directly as text; user units are millimetres and the viewBox is
//! cropped tight to the drawn content.

use crate::canvas::{
    Canvas, Rect, Shape, TextBlock, ASCENT_FACTOR, LINE_HEIGHT_FACTOR, PT_TO_MM,
};

/// Whitespace kept around the cropped content, in millimetres.
pub const EXPORT_PAD_MM: f64 = 2.5;

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// Renders the canvas to an SVG document string.
pub fn render_svg(canvas: &Canvas) -> String {
    let bounds = canvas
        .content_bounds()
        .unwrap_or(Rect::new(0.0, 0.0, 1.0, 1.0));
    let width = bounds.w * canvas.width_mm() + 2.0 * EXPORT_PAD_MM;
    let height = bounds.h * canvas.height_mm() + 2.0 * EXPORT_PAD_MM;

    // Normalized coordinates are y-up, SVG user space is y-down.
    let map_x = |x: f64| (x - bounds.x) * canvas.width_mm() + EXPORT_PAD_MM;
    let map_y = |y: f64| (bounds.top() - y) * canvas.height_mm() + EXPORT_PAD_MM;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.3}mm\" height=\"{height:.3}mm\" viewBox=\"0 0 {width:.3} {height:.3}\">",
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>");

    svg.push_str("<defs>");
    let mut clip_index = 0usize;
    for shape in canvas.shapes() {
        if let Shape::Text(block) = shape {
            if let Some(clip) = block.clip {
                svg.push_str(&format!(
                    "<clipPath id=\"clip{}\"><rect x=\"{:.3}\" y=\"{:.3}\" width=\"{:.3}\" height=\"{:.3}\"/></clipPath>",
                    clip_index,
                    map_x(clip.x),
                    map_y(clip.top()),
                    clip.w * canvas.width_mm(),
                    clip.h * canvas.height_mm(),
                ));
                clip_index += 1;
            }
        }
    }
    svg.push_str("</defs>");

    let mut clip_index = 0usize;
    for shape in canvas.shapes() {
        match shape {
            Shape::Rect { rect, line_width } => {
                svg.push_str(&format!(
                    "<rect x=\"{:.3}\" y=\"{:.3}\" width=\"{:.3}\" height=\"{:.3}\" fill=\"none\" stroke=\"black\" stroke-width=\"{:.3}\"/>",
                    map_x(rect.x),
                    map_y(rect.top()),
                    rect.w * canvas.width_mm(),
                    rect.h * canvas.height_mm(),
                    line_width * PT_TO_MM,
                ));
            }
            Shape::Text(block) => {
                let clip_attr = if block.clip.is_some() {
                    let attr = format!(" clip-path=\"url(#clip{clip_index})\"");
                    clip_index += 1;
                    attr
                } else {
                    String::new()
                };
                push_text(&mut svg, block, &clip_attr, map_x(block.x), map_y(block.y));
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

fn push_text(svg: &mut String, block: &TextBlock, clip_attr: &str, x: f64, y_top: f64) {
    let font_size = block.font_size * PT_TO_MM;
    let weight_attr = if block.bold {
        " font-weight=\"bold\""
    } else {
        ""
    };

    for (index, line) in block.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let baseline =
            y_top + (ASCENT_FACTOR + index as f64 * LINE_HEIGHT_FACTOR) * font_size;
        svg.push_str(&format!(
            "<text x=\"{x:.3}\" y=\"{baseline:.3}\" font-family=\"{FONT_FAMILY}\" font-size=\"{font_size:.3}\"{weight_attr}{clip_attr}>{}</text>",
            escape_xml(line),
        ));
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
