// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::buffer::{is_high_surrogate, is_line_break, is_low_surrogate, CR, LF};
use crate::layout::{BoundingBox, GlyphBounds, InsertionBounds, LayoutBridge, LineInfo};

#[derive(Copy, Clone, Debug, Default)]
struct LineRecord {
    info: LineInfo,
    /// Index of the first glyph of the line in `glyph_starts`.
    first_glyph: usize,
    /// Number of glyphs on the line, excluding line break units.
    visible_glyphs: usize,
}

/// A layout where every code point has the same advance and lines only break
/// at `\n`, `\r\n` and `\r`.
///
/// Lines are left aligned and never wrap. Useful for hosts without a shaping
/// engine, such as terminal frontends and tests.
#[derive(Clone, Debug)]
pub struct MonospaceLayout {
    advance: f64,
    line_height: f64,
    text_len: usize,
    /// Code unit offset at which each glyph starts.
    glyph_starts: Vec<usize>,
    lines: Vec<LineRecord>,
}

impl MonospaceLayout {
    /// Create an empty layout with the given glyph advance and line height.
    pub fn new(advance: f64, line_height: f64) -> Self {
        let mut layout = Self {
            advance,
            line_height,
            text_len: 0,
            glyph_starts: Vec::new(),
            lines: Vec::new(),
        };
        layout.relayout(&[]);
        layout
    }

    /// Index of the line containing the insertion point at `offset`.
    fn line_for_offset(&self, offset: usize) -> usize {
        self.lines
            .partition_point(|line| line.info.offset_in_source <= offset)
            .saturating_sub(1)
    }

    fn line_for_y(&self, y: f64) -> usize {
        self.lines
            .iter()
            .position(|line| y < line.info.y + line.info.height)
            .unwrap_or(self.lines.len() - 1)
    }

    fn glyph_offset(&self, glyph_index: usize) -> usize {
        self.glyph_starts
            .get(glyph_index)
            .copied()
            .unwrap_or(self.text_len)
    }

    /// Column of the insertion point at `offset` within `line`.
    fn column(&self, line: &LineRecord, offset: usize) -> usize {
        self.glyph_index_for_char(offset)
            .saturating_sub(line.first_glyph)
            .min(line.visible_glyphs)
    }

    fn push_line(&mut self, start: usize, end: usize, first_glyph: usize, visible_glyphs: usize) {
        let index = self.lines.len();
        let info = LineInfo {
            offset_in_source: start,
            length_in_source: end - start,
            x: 0.0,
            y: index as f64 * self.line_height,
            width: visible_glyphs as f64 * self.advance,
            height: self.line_height,
        };
        self.lines.push(LineRecord {
            info,
            first_glyph,
            visible_glyphs,
        });
    }
}

impl LayoutBridge for MonospaceLayout {
    fn relayout(&mut self, text: &[u16]) {
        self.text_len = text.len();
        self.glyph_starts.clear();
        self.lines.clear();

        let mut line_start = 0;
        let mut line_first_glyph = 0;
        let mut visible = 0;
        let mut i = 0;
        while i < text.len() {
            let unit = text[i];
            self.glyph_starts.push(i);
            if is_line_break(unit) {
                let end = if unit == CR && text.get(i + 1) == Some(&LF) {
                    self.glyph_starts.push(i + 1);
                    i + 2
                } else {
                    i + 1
                };
                self.push_line(line_start, end, line_first_glyph, visible);
                line_start = end;
                line_first_glyph = self.glyph_starts.len();
                visible = 0;
                i = end;
                continue;
            }
            let pair =
                is_high_surrogate(unit) && text.get(i + 1).is_some_and(|u| is_low_surrogate(*u));
            i += if pair { 2 } else { 1 };
            visible += 1;
        }
        self.push_line(line_start, text.len(), line_first_glyph, visible);
    }

    fn offset_at_point(&self, x: f64, y: f64) -> usize {
        let line = &self.lines[self.line_for_y(y)];
        // Count the glyphs whose center lies left of `x`.
        let mut column = 0;
        while column < line.visible_glyphs
            && line.info.x + (column as f64 + 0.5) * self.advance < x
        {
            column += 1;
        }
        self.glyph_offset(line.first_glyph + column)
    }

    fn glyph_bounds_at(&self, offset: usize) -> GlyphBounds {
        let offset = offset.min(self.text_len);
        let line_index = self.line_for_offset(offset);
        let line = &self.lines[line_index];
        let x0 = line.info.x + self.column(line, offset) as f64 * self.advance;
        let is_visible = offset < self.text_len && offset < line.info.end_in_source() && {
            let glyph = self.glyph_index_for_char(offset);
            glyph < line.first_glyph + line.visible_glyphs
        };
        let x1 = if is_visible { x0 + self.advance } else { x0 };
        GlyphBounds {
            rect: BoundingBox::new(x0, line.info.y, x1, line.info.y + line.info.height),
            line_index,
            line: line.info,
        }
    }

    fn glyph_index_for_char(&self, offset: usize) -> usize {
        if offset >= self.text_len {
            return self.glyph_starts.len();
        }
        self.glyph_starts
            .partition_point(|start| *start <= offset)
            .saturating_sub(1)
    }

    fn insertion_bounds_at(&self, glyph_index: usize) -> InsertionBounds {
        let offset = self.glyph_offset(glyph_index);
        let glyph = self.glyph_bounds_at(offset);
        let x = glyph.rect.x0;
        InsertionBounds {
            rect: BoundingBox::new(x, glyph.rect.y0, x, glyph.rect.y1),
            line_index: glyph.line_index,
            line: glyph.line,
            glyph: (glyph.rect.width() > 0.0).then_some(glyph.rect),
        }
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_info(&self, line_index: usize) -> Option<LineInfo> {
        self.lines.get(line_index).map(|line| line.info)
    }

    fn max_line_width(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.info.width)
            .fold(0.0, f64::max)
    }
}
