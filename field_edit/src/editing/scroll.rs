// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::config::TextAlignment;
use crate::editing::FieldDriver;
use crate::hooks::EditHooks;
use crate::layout::LayoutBridge;

/// The scrollable area a field's text is shown through.
pub trait Viewport {
    /// Horizontal scroll offset, in pixels.
    fn horizontal_offset(&self) -> f64;

    /// Vertical scroll offset, in pixels.
    fn vertical_offset(&self) -> f64;

    /// Width of the visible area.
    fn viewport_width(&self) -> f64;

    /// Height of the visible area.
    fn viewport_height(&self) -> f64;

    /// Scroll horizontally so that `offset` is at the left edge.
    fn scroll_to_horizontal_offset(&mut self, offset: f64);

    /// Scroll vertically so that `offset` is at the top edge.
    fn scroll_to_vertical_offset(&mut self, offset: f64);
}

/// A plain [`Viewport`] which just stores its offsets.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Horizontal scroll offset.
    pub horizontal_offset: f64,
    /// Vertical scroll offset.
    pub vertical_offset: f64,
    /// Width of the visible area.
    pub width: f64,
    /// Height of the visible area.
    pub height: f64,
}

impl ScrollState {
    /// Create an unscrolled viewport of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            horizontal_offset: 0.0,
            vertical_offset: 0.0,
            width,
            height,
        }
    }
}

impl Viewport for ScrollState {
    fn horizontal_offset(&self) -> f64 {
        self.horizontal_offset
    }

    fn vertical_offset(&self) -> f64 {
        self.vertical_offset
    }

    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn viewport_height(&self) -> f64 {
        self.height
    }

    fn scroll_to_horizontal_offset(&mut self, offset: f64) {
        self.horizontal_offset = offset;
    }

    fn scroll_to_vertical_offset(&mut self, offset: f64) {
        self.vertical_offset = offset;
    }
}

/// Hints for a request to scroll the caret into view.
///
/// A set of flags; combine them with [`union`](Self::union).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingScroll(u8);

impl PendingScroll {
    /// Scroll just far enough to show the caret.
    pub const NONE: Self = Self(0);
    /// Show as much of the line as possible, honouring the text alignment.
    ///
    /// Used after the whole text was replaced.
    pub const SHOW_MAXIMUM_LINE_WIDTH: Self = Self(1);
    /// When scrolling left, overshoot by a third of the viewport width.
    pub const JUMP_LEFT: Self = Self(2);
    /// When scrolling right, overshoot by a third of the viewport width.
    pub const JUMP_RIGHT: Self = Self(4);

    /// Both sets of hints.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether every hint in `other` is set.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl<H, L, V> FieldDriver<'_, H, L, V>
where
    H: EditHooks,
    L: LayoutBridge,
    V: Viewport,
{
    /// Scroll the viewport so that the caret is visible.
    pub fn ensure_caret_visible(&mut self) {
        self.refresh_layout();
        self.scroll_caret_into_view(PendingScroll::NONE);
    }

    /// Scroll the caret into view now, or once the layout is clean.
    pub(crate) fn scroll_caret_into_view(&mut self, hints: PendingScroll) {
        if self.editor.layout_state.is_pending() {
            self.editor.request_scroll(hints);
            return;
        }
        let caret = self.layout.caret_bounds(self.editor.caret.position).rect;

        let top = self.viewport.vertical_offset();
        let height = self.viewport.viewport_height();
        if caret.y0 < top {
            self.viewport.scroll_to_vertical_offset(caret.y0);
        } else if caret.y1 > top + height {
            self.viewport.scroll_to_vertical_offset(caret.y1 - height);
        }

        let current = self.viewport.horizontal_offset();
        let width = self.viewport.viewport_width();
        let caret_width = self.editor.config.caret_width;
        let caret_right = caret.x0 + caret_width;
        let max_offset = (self.layout.max_line_width() + caret_width - width).max(0.0);
        let jump = width / 3.0;

        let target = if hints.contains(PendingScroll::SHOW_MAXIMUM_LINE_WIDTH) {
            match self.editor.config.text_alignment {
                TextAlignment::Left | TextAlignment::Center => (caret_right - width).max(0.0),
                TextAlignment::Right => caret.x0.clamp(0.0, max_offset),
            }
        } else if caret.x0 < current {
            let mut target = caret.x0;
            if hints.contains(PendingScroll::JUMP_LEFT) {
                target -= jump;
            }
            target.max(0.0)
        } else if caret_right > current + width {
            let mut target = caret_right - width;
            if hints.contains(PendingScroll::JUMP_RIGHT) {
                target += jump;
            }
            target.min(max_offset).max(0.0)
        } else {
            current
        };
        if target != current {
            log::trace!(
                target: "field_edit::scroll",
                "scrolling horizontally from {current} to {target}"
            );
            self.viewport.scroll_to_horizontal_offset(target);
        }
    }
}
