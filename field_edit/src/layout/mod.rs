// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The geometry interface between the editor and a text layout engine.
//!
//! The editor does not shape text. It asks a [`LayoutBridge`] to map between
//! character offsets and pixel positions, and tracks whether that layout is
//! in sync with the buffer through [`LayoutState`].

mod monospace;

pub use monospace::MonospaceLayout;

/// An axis-aligned rectangle in layout coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoundingBox {
    /// Left edge.
    pub x0: f64,
    /// Top edge.
    pub y0: f64,
    /// Right edge.
    pub x1: f64,
    /// Bottom edge.
    pub y1: f64,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Vertical center of the box.
    pub fn center_y(&self) -> f64 {
        (self.y0 + self.y1) * 0.5
    }
}

/// Metrics of one visual line.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LineInfo {
    /// Offset of the first code unit of the line.
    pub offset_in_source: usize,
    /// Number of code units in the line, including a trailing line break.
    pub length_in_source: usize,
    /// Left edge of the line.
    pub x: f64,
    /// Top edge of the line.
    pub y: f64,
    /// Advance width of the line's content.
    pub width: f64,
    /// Height of the line.
    pub height: f64,
}

impl LineInfo {
    /// Offset one past the last code unit of the line.
    pub fn end_in_source(&self) -> usize {
        self.offset_in_source + self.length_in_source
    }

    /// Bounds of the line.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Bounds of the glyph covering a character offset.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GlyphBounds {
    /// Bounds of the glyph.
    pub rect: BoundingBox,
    /// Index of the line containing the glyph.
    pub line_index: usize,
    /// Metrics of that line.
    pub line: LineInfo,
}

/// Bounds of an insertion point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InsertionBounds {
    /// A zero-width rectangle at the insertion point, spanning the line height.
    pub rect: BoundingBox,
    /// Index of the line containing the insertion point.
    pub line_index: usize,
    /// Metrics of that line.
    pub line: LineInfo,
    /// Bounds of the glyph after the insertion point, if there is a visible one.
    pub glyph: Option<BoundingBox>,
}

/// Geometry queries the editor issues against a laid-out text.
///
/// Offsets are UTF-16 code unit offsets into the buffer passed to the last
/// [`relayout`](Self::relayout) call. Implementations clamp out-of-range
/// queries to the nearest valid answer.
pub trait LayoutBridge {
    /// Recompute the layout for `text`.
    fn relayout(&mut self, text: &[u16]);

    /// The insertion offset nearest to a point.
    fn offset_at_point(&self, x: f64, y: f64) -> usize;

    /// Bounds of the glyph covering `offset`.
    fn glyph_bounds_at(&self, offset: usize) -> GlyphBounds;

    /// Index of the glyph that starts at or covers `offset`.
    ///
    /// For `offset == len` this is one past the last glyph.
    fn glyph_index_for_char(&self, offset: usize) -> usize;

    /// Bounds of the insertion point before glyph `glyph_index`.
    fn insertion_bounds_at(&self, glyph_index: usize) -> InsertionBounds;

    /// Number of lines; at least one, even for empty text.
    fn line_count(&self) -> usize;

    /// Metrics of line `line_index`, if it exists.
    fn line_info(&self, line_index: usize) -> Option<LineInfo>;

    /// Width of the widest line.
    fn max_line_width(&self) -> f64;

    /// Bounds of the caret placed at `offset`.
    fn caret_bounds(&self, offset: usize) -> InsertionBounds {
        self.insertion_bounds_at(self.glyph_index_for_char(offset))
    }
}

/// Whether the layout reflects the current buffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LayoutState {
    /// The layout matches the buffer and geometry queries are valid.
    Clean,
    /// The buffer or settings changed since the last layout pass.
    #[default]
    PendingLayout,
}

impl LayoutState {
    /// Whether geometry queries need a layout pass first.
    pub fn is_pending(self) -> bool {
        self == Self::PendingLayout
    }
}
