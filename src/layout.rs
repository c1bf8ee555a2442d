//! Static layout table for the CFO overview wireframe.
//!
//! Panel geometry is a fixed design decision, not computed from content, so
//! the coordinates live here as data rather than inline literals in the
//! generator.  All values are in normalized `[0, 1]` canvas units except font
//! sizes (points) and the physical figure dimensions (millimetres).

use crate::canvas::Rect;

/// Physical figure width (13.5 in).
pub const FIGURE_WIDTH_MM: f64 = 342.9;

/// Physical figure height (8 in).
pub const FIGURE_HEIGHT_MM: f64 = 203.2;

/// Outer frame around the whole wireframe.
pub const FRAME: Rect = Rect::new(0.03, 0.05, 0.94, 0.92);

/// Stroke width of the outer frame, in points.
pub const FRAME_LINE_WIDTH: f64 = 2.0;

/// Default title font size, in points.
pub const DEFAULT_TITLE_SIZE: f64 = 11.0;

/// Default body font size, in points.
pub const DEFAULT_BODY_SIZE: f64 = 9.0;

/// Row occupied by the KPI tiles.
pub const KPI_ROW: Rect = Rect::new(0.25, 0.83, 0.70, 0.09);

/// Number of KPI tiles in the row.
pub const KPI_TILE_COUNT: usize = 4;

/// Horizontal gap subtracted from each KPI tile.
pub const KPI_TILE_GUTTER: f64 = 0.005;

/// Titles of the KPI tiles, left to right.
pub const KPI_TILE_TITLES: [&str; KPI_TILE_COUNT] = [
    "Revenue (aggregated)",
    "Operating profit",
    "Operating margin",
    "Cash from ops",
];

/// A caption line drawn above the frame.
pub struct Caption {
    /// Left edge of the caption.
    pub x: f64,
    /// Top edge of the caption.
    pub y: f64,
    /// Caption text.
    pub text: &'static str,
    /// Font size in points.
    pub font_size: f64,
    /// Whether the caption is bold.
    pub bold: bool,
}

/// The two caption lines of the figure, in draw order.
pub const CAPTIONS: [Caption; 2] = [
    Caption {
        x: 0.03,
        y: 0.975,
        text: "Figure 1 — Conceptual wireframe (illustrative; no real/simulated data)",
        font_size: 10.0,
        bold: false,
    },
    Caption {
        x: 0.03,
        y: 0.948,
        text: "CFO Dashboard 1: Enterprise Financial Performance Overview",
        font_size: 14.0,
        bold: true,
    },
];

/// One entry of the panel layout table.
pub struct PanelSpec {
    /// Stable identifier, useful in logs and tests.
    pub name: &'static str,
    /// Panel geometry.
    pub rect: Rect,
    /// Panel title.
    pub title: &'static str,
    /// Bullet items of the panel body.
    pub body: &'static [&'static str],
    /// Title font size in points.
    pub title_size: f64,
    /// Starting body font size in points.
    pub body_size: f64,
}

impl PanelSpec {
    const fn new(name: &'static str, rect: Rect, title: &'static str) -> Self {
        Self {
            name,
            rect,
            title,
            body: &[],
            title_size: DEFAULT_TITLE_SIZE,
            body_size: DEFAULT_BODY_SIZE,
        }
    }

    const fn with_body(mut self, body: &'static [&'static str]) -> Self {
        self.body = body;
        self
    }
}

/// Geometry of the `index`-th KPI tile (0-based, left to right).
pub fn kpi_tile_rect(index: usize) -> Rect {
    debug_assert!(index < KPI_TILE_COUNT);
    let tile_w = KPI_ROW.w / KPI_TILE_COUNT as f64;
    Rect::new(
        KPI_ROW.x + index as f64 * tile_w,
        KPI_ROW.y,
        tile_w - KPI_TILE_GUTTER,
        KPI_ROW.h,
    )
}

/// The full panel table: filter pane, four KPI tiles, performance bridge,
/// exceptions queue, comparison panel and trend strip.
pub fn panels() -> Vec<PanelSpec> {
    let mut panels = vec![PanelSpec::new(
        "filters",
        Rect::new(0.05, 0.10, 0.18, 0.82),
        "Filters (global)",
    )
    .with_body(&[
        "Time period",
        "Channel",
        "Region / Business unit",
        "Currency / reporting view",
    ])];

    for (index, title) in KPI_TILE_TITLES.into_iter().enumerate() {
        panels.push(
            PanelSpec::new("kpi_tile", kpi_tile_rect(index), title)
                .with_body(&["Status / direction"]),
        );
    }

    panels.push(
        PanelSpec::new(
            "performance_bridge",
            Rect::new(0.25, 0.52, 0.44, 0.28),
            "Performance bridge (conceptual)",
        )
        .with_body(&[
            "Period vs prior / plan variance bridge",
            "Drivers: volume, price/mix, costs",
            "Click to drill: channel → business unit",
        ]),
    );

    panels.push(
        PanelSpec::new(
            "exceptions",
            Rect::new(0.71, 0.52, 0.24, 0.28),
            "Exceptions & escalation queue",
        )
        .with_body(&[
            "Material variance flags (Top 5)",
            "Risk / control breaches (conceptual)",
            "Owner + status + next review date",
        ]),
    );

    panels.push(
        PanelSpec::new(
            "comparison",
            Rect::new(0.25, 0.10, 0.44, 0.38),
            "Channel & business unit comparison",
        )
        .with_body(&[
            "Contribution mix by channel",
            "Margin comparison (conceptual bars)",
            "Cost-to-revenue comparison",
        ]),
    );

    panels.push(
        PanelSpec::new(
            "trends",
            Rect::new(0.71, 0.10, 0.24, 0.38),
            "Trends (conceptual)",
        )
        .with_body(&[
            "Rolling view: revenue, margin, cash",
            "Annotated events / explanations (text)",
        ]),
    );

    panels
}
