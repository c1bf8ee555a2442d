//! Explicit drawing context for the wireframe figure.
//!
//! A [`Canvas`] accumulates the rectangles and text blocks that make up a
//! figure instead of mutating an ambient current-figure handle.  Coordinates
//! are normalized to `[0, 1]` in both axes with the origin at the bottom-left;
//! the canvas additionally records the physical figure size so the export
//! backends can map normalized units to millimetres.  Font sizes are given in
//! points.

/// Millimetres per typographic point.
pub(crate) const PT_TO_MM: f64 = 25.4 / 72.0;

/// Approximate advance width of a glyph as a fraction of the font size.
pub(crate) const GLYPH_WIDTH_FACTOR: f64 = 0.5;

/// Line height as a fraction of the font size.
pub(crate) const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Baseline distance from the top of a line as a fraction of the font size.
pub(crate) const ASCENT_FACTOR: f64 = 0.8;

/// An axis-aligned rectangle in normalized canvas coordinates.
///
/// `x` and `y` locate the bottom-left corner; `w` and `h` extend right and up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Bottom edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Creates a rectangle from its bottom-left corner and extent.
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Top edge.
    pub fn top(&self) -> f64 {
        self.y + self.h
    }

    /// Whether `other` lies entirely within this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.top() <= self.top()
    }
}

/// A block of text anchored at its top-left corner.
///
/// Multi-line content is stored newline-joined; lines flow downward from the
/// anchor.  An optional clip rectangle restricts the visible area in backends
/// that support clipping.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    /// Left edge of the block.
    pub x: f64,
    /// Top edge of the block.
    pub y: f64,
    /// Newline-joined text content.
    pub text: String,
    /// Font size in points.
    pub font_size: f64,
    /// Whether the text is rendered with bold emphasis.
    pub bold: bool,
    /// Optional clip rectangle.
    pub clip: Option<Rect>,
}

impl TextBlock {
    /// Creates a regular-weight text block without clipping.
    pub fn new(x: f64, y: f64, text: impl Into<String>, font_size: f64) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            font_size,
            bold: false,
            clip: None,
        }
    }

    /// Marks the block as bold and returns it.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Sets the clip rectangle and returns the updated block.
    pub fn with_clip(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }

    /// Lines of the block, in top-to-bottom order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// Number of lines in the block.
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }
}

/// A drawable shape recorded on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// An unfilled, stroked rectangle.  The line width is in points.
    Rect {
        /// Geometry in normalized coordinates.
        rect: Rect,
        /// Stroke width in points.
        line_width: f64,
    },
    /// A text block.
    Text(TextBlock),
}

/// The drawing surface for one figure.
#[derive(Clone, Debug)]
pub struct Canvas {
    width_mm: f64,
    height_mm: f64,
    shapes: Vec<Shape>,
}

impl Canvas {
    /// Creates an empty canvas with the given physical size in millimetres.
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
            shapes: Vec::new(),
        }
    }

    /// Physical figure width in millimetres.
    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    /// Physical figure height in millimetres.
    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    /// All shapes in draw order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Records an unfilled rectangle outline.
    pub fn draw_rect(&mut self, rect: Rect, line_width: f64) {
        self.shapes.push(Shape::Rect { rect, line_width });
    }

    /// Records a text block.
    pub fn draw_text(&mut self, text: TextBlock) {
        self.shapes.push(Shape::Text(text));
    }

    /// Removes the most recently drawn shape if it is a text block.
    ///
    /// Used by the body-text font fallback to discard a rejected attempt
    /// before redrawing at a smaller size.  Returns whether a block was
    /// removed.
    pub fn remove_last_text(&mut self) -> bool {
        if matches!(self.shapes.last(), Some(Shape::Text(_))) {
            self.shapes.pop();
            true
        } else {
            false
        }
    }

    /// Estimated extent of a text block in normalized units.
    ///
    /// Text metrics differ between rendering engines, so the extent is a
    /// coarse estimate based on fixed per-glyph and per-line factors.  It is
    /// only used for bounding-box cropping, where a small overestimate is
    /// harmless.
    pub fn text_extent(&self, block: &TextBlock) -> (f64, f64) {
        let widest = block.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let width_mm = widest as f64 * block.font_size * GLYPH_WIDTH_FACTOR * PT_TO_MM;
        let height_mm =
            block.line_count() as f64 * block.font_size * LINE_HEIGHT_FACTOR * PT_TO_MM;
        (width_mm / self.width_mm, height_mm / self.height_mm)
    }

    /// The tight bounding box of all drawn content, in normalized units.
    ///
    /// Returns `None` for an empty canvas.  Text blocks contribute their
    /// estimated extent below the anchor, clipped blocks only the clipped
    /// region.
    pub fn content_bounds(&self) -> Option<Rect> {
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        let mut grow = |x0: f64, y0: f64, x1: f64, y1: f64| {
            bounds = Some(match bounds {
                None => (x0, y0, x1, y1),
                Some((bx0, by0, bx1, by1)) => {
                    (bx0.min(x0), by0.min(y0), bx1.max(x1), by1.max(y1))
                }
            });
        };

        for shape in &self.shapes {
            match shape {
                Shape::Rect { rect, .. } => grow(rect.x, rect.y, rect.right(), rect.top()),
                Shape::Text(block) => {
                    let (w, h) = self.text_extent(block);
                    let (mut x0, mut y0, mut x1, mut y1) =
                        (block.x, block.y - h, block.x + w, block.y);
                    if let Some(clip) = block.clip {
                        x0 = x0.max(clip.x);
                        y0 = y0.max(clip.y);
                        x1 = x1.min(clip.right());
                        y1 = y1.min(clip.top());
                    }
                    if x1 > x0 && y1 > y0 {
                        grow(x0, y0, x1, y1);
                    }
                }
            }
        }

        bounds.map(|(x0, y0, x1, y1)| Rect::new(x0, y0, x1 - x0, y1 - y0))
    }
}
