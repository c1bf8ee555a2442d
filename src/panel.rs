//! Renders one labeled panel onto the canvas.

use crate::canvas::{Canvas, Rect, TextBlock};
use crate::wrap::wrap;

/// Stroke width of a panel border, in points.
pub const PANEL_BORDER_WIDTH: f64 = 1.5;

/// Character width at which body bullet items are wrapped.
pub const BODY_WRAP_WIDTH: usize = 28;

/// Newline count in the joined body text at which the font size is stepped
/// down, i.e. blocks of more than this many rendered lines shrink.
pub const MAX_BODY_NEWLINES: usize = 8;

/// Number of candidate body font sizes tried before giving up.
pub const FONT_FALLBACK_STEPS: usize = 3;

const TITLE_INSET_X: f64 = 0.01;
const TITLE_INSET_Y: f64 = 0.015;
const BODY_INSET_Y: f64 = 0.06;

/// Draws a bordered panel with an optional bold title and optional bulleted
/// body text.
///
/// The title is clipped to the panel rectangle.  Body items are each prefixed
/// with a bullet and wrapped at [`BODY_WRAP_WIDTH`] characters, then the
/// joined block is tried at up to [`FONT_FALLBACK_STEPS`] decreasing font
/// sizes; an attempt is kept once the joined text has fewer than
/// [`MAX_BODY_NEWLINES`] newlines, and the smallest size is always kept.
/// Rejected attempts are removed from the canvas before redrawing.
pub fn draw_panel(
    canvas: &mut Canvas,
    rect: Rect,
    title: Option<&str>,
    body: &[&str],
    title_size: f64,
    body_size: f64,
) {
    canvas.draw_rect(rect, PANEL_BORDER_WIDTH);

    if let Some(title) = title.filter(|t| !t.is_empty()) {
        canvas.draw_text(
            TextBlock::new(
                rect.x + TITLE_INSET_X,
                rect.top() - TITLE_INSET_Y,
                title,
                title_size,
            )
            .bold()
            .with_clip(rect),
        );
    }

    if body.is_empty() {
        return;
    }

    let body_text = body
        .iter()
        .map(|line| format!("• {}", wrap(line, BODY_WRAP_WIDTH)))
        .collect::<Vec<_>>()
        .join("\n");
    let newline_count = body_text.matches('\n').count();

    for step in 0..FONT_FALLBACK_STEPS {
        let font_size = body_size - step as f64;
        canvas.draw_text(
            TextBlock::new(
                rect.x + TITLE_INSET_X,
                rect.top() - BODY_INSET_Y,
                body_text.clone(),
                font_size,
            )
            .with_clip(rect),
        );

        // Crude overflow heuristic: if the block wraps to too many lines,
        // discard it and retry one point smaller.
        if newline_count < MAX_BODY_NEWLINES || step == FONT_FALLBACK_STEPS - 1 {
            break;
        }
        canvas.remove_last_text();
        log::debug!(
            "body text of {} lines overflows at {}pt, retrying smaller",
            newline_count + 1,
            font_size
        );
    }
}
