// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use icu_properties::props::{GeneralCategory, GeneralCategoryGroup};
use icu_properties::CodePointMapData;

use crate::buffer::is_line_break;
use crate::editing::{FieldDriver, FieldEditor, InsertionMode, PendingScroll, Viewport};
use crate::hooks::EditHooks;
use crate::layout::{BoundingBox, LayoutBridge};

/// A caret movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Movement {
    /// One character to the left.
    Left,
    /// One character to the right.
    Right,
    /// One line up.
    Up,
    /// One line down.
    Down,
    /// One viewport height up.
    PageUp,
    /// One viewport height down.
    PageDown,
    /// To the start of the line, or of the text if `absolute`.
    Home {
        /// Move to the start of the whole text.
        absolute: bool,
    },
    /// To the end of the line, or of the text if `absolute`.
    End {
        /// Move to the end of the whole text.
        absolute: bool,
    },
    /// To the end of the current or next word.
    NextWord,
    /// To the start of the current or previous word.
    PreviousWord,
}

impl Movement {
    /// Whether collapsing a selection with this movement keeps its start.
    fn is_backward(self) -> bool {
        matches!(
            self,
            Self::Left | Self::Up | Self::PageUp | Self::Home { .. } | Self::PreviousWord
        )
    }

    fn scroll_hint(self) -> PendingScroll {
        match self {
            Self::Left | Self::PreviousWord | Self::Home { .. } => PendingScroll::JUMP_LEFT,
            Self::Right | Self::NextWord | Self::End { .. } => PendingScroll::JUMP_RIGHT,
            Self::Up | Self::Down | Self::PageUp | Self::PageDown => PendingScroll::NONE,
        }
    }
}

/// Whitespace and hyphens separate words.
fn is_non_word(unit: u16) -> bool {
    unit == u16::from(b'-') || char::from_u32(u32::from(unit)).is_some_and(char::is_whitespace)
}

/// Whether a word starts between `prev` and `next`.
fn is_word_start(prev: u16, next: u16) -> bool {
    is_non_word(prev) && !is_non_word(next)
}

/// Whether a word ends between `prev` and `next`.
fn is_word_end(prev: u16, next: u16) -> bool {
    !is_non_word(prev) && is_non_word(next)
}

fn is_punctuation(ch: char) -> bool {
    let category = CodePointMapData::<GeneralCategory>::new().get(ch);
    GeneralCategoryGroup::Punctuation.contains(category)
}

impl<H> FieldEditor<H>
where
    H: EditHooks,
{
    // --- MARK: Words ---
    /// The word around `pos`, as a `(start, end)` pair of offsets.
    ///
    /// `start` is the nearest word start before `pos` and `end` the nearest
    /// word end after it, where words are separated by whitespace and
    /// hyphens. Masked text is a single word.
    pub fn find_word(&self, pos: usize) -> (usize, usize) {
        let len = self.buffer.len();
        if self.is_masked() {
            return (0, len);
        }
        let units = self.buffer.units();
        let pos = pos.min(len);

        let mut start = pos.saturating_sub(1);
        while start > 0 && !is_word_start(units[start - 1], units[start]) {
            start -= 1;
        }
        let mut end = (pos + 1).min(len);
        while end < len && !is_word_end(units[end - 1], units[end]) {
            end += 1;
        }
        (
            self.adjust_to_valid_position(start, false),
            self.adjust_to_valid_position(end, true),
        )
    }

    /// Select the token under the caret.
    ///
    /// A run of whitespace or a run of word characters is selected whole.
    /// On punctuation the selection is collapsed to the caret. Masked fields
    /// select all of their text.
    pub fn select_current_token(&mut self) {
        let len = self.buffer.len();
        if len == 0 {
            return;
        }
        let mut this = self.tracking_scope();
        if this.is_masked() {
            this.select_range(0, len);
            return;
        }
        let index = this.caret.position.min(len - 1);
        let Some(ch) = this.buffer.code_point_at(index) else {
            return;
        };
        if is_punctuation(ch) {
            this.selection.anchor = None;
            return;
        }
        let (start, end) = if ch.is_whitespace() {
            this.expand_while(index, char::is_whitespace)
        } else {
            this.expand_while(index, |ch| !ch.is_whitespace() && !is_punctuation(ch))
        };
        this.select_range(start, end);
    }

    /// The maximal range around `index` whose code points all satisfy `pred`.
    fn expand_while(&self, index: usize, pred: impl Fn(char) -> bool) -> (usize, usize) {
        let holds = |i: usize| self.buffer.code_point_at(i).is_some_and(&pred);
        let mut start = index;
        while start > 0 && holds(start - 1) {
            start -= 1;
        }
        let mut end = index;
        while end < self.buffer.len() && holds(end) {
            end += 1;
        }
        (start, end)
    }
}

impl<H, L, V> FieldDriver<'_, H, L, V>
where
    H: EditHooks,
    L: LayoutBridge,
    V: Viewport,
{
    // --- MARK: Keyboard navigation ---
    /// Move the caret, extending the selection if `extend` is set.
    ///
    /// Without `extend`, an existing selection is collapsed to its start for
    /// backward movements and to its end otherwise, without moving further.
    /// Returns whether the caret or the selection changed.
    pub fn move_caret(&mut self, movement: Movement, extend: bool) -> bool {
        self.refresh_layout();
        let before = (self.editor.caret.position, self.editor.selection.anchor);

        let selection = self.editor.selection_range();
        let collapse = !extend && !selection.is_empty();
        let (target, preferred_x) = if collapse {
            let edge = if movement.is_backward() {
                selection.start
            } else {
                selection.end
            };
            (edge, None)
        } else {
            self.movement_target(movement)
        };

        let mut this = self.editor.tracking_scope();
        if extend {
            if this.selection.anchor.is_none() {
                this.selection.anchor = Some(this.caret.position);
            }
        } else {
            this.selection.anchor = None;
        }
        this.caret.position = target;
        this.normalize_anchor();
        this.caret.preferred_x = preferred_x;
        this.caret.reset_blink();
        drop(this);

        let after = (self.editor.caret.position, self.editor.selection.anchor);
        log::trace!(
            target: "field_edit::navigation",
            "{movement:?} (extend: {extend}) moved {before:?} to {after:?}"
        );
        self.scroll_caret_into_view(movement.scroll_hint());
        before != after
    }

    /// Where `movement` takes the caret, with the horizontal position to
    /// remember for vertical movements.
    fn movement_target(&self, movement: Movement) -> (usize, Option<f64>) {
        let editor = &*self.editor;
        let caret = editor.caret.position;
        let len = editor.buffer.len();
        let target = match movement {
            Movement::Left => editor.adjust_to_valid_position(caret.saturating_sub(1), false),
            Movement::Right => editor.adjust_to_valid_position((caret + 1).min(len), true),
            Movement::Up | Movement::Down | Movement::PageUp | Movement::PageDown => {
                let (target, x) = self.vertical_target(movement);
                return (target, Some(x));
            }
            Movement::Home { absolute: true } => 0,
            Movement::End { absolute: true } => len,
            Movement::Home { absolute: false } => {
                self.layout.caret_bounds(caret).line.offset_in_source.min(len)
            }
            Movement::End { absolute: false } => {
                let line = self.layout.caret_bounds(caret).line;
                let mut end = line.end_in_source().min(len);
                if end > line.offset_in_source && is_line_break(editor.buffer.char_at(end - 1)) {
                    end -= 1;
                }
                editor.adjust_to_valid_position(end, false)
            }
            Movement::NextWord => editor.find_word(caret).1,
            Movement::PreviousWord => editor.find_word(caret).0,
        };
        (target, None)
    }

    /// Hit-test one line or one page above or below the caret.
    ///
    /// The probe is clamped to the centers of the first and last lines, so
    /// moving up from the first line (or down from the last) stays on it.
    fn vertical_target(&self, movement: Movement) -> (usize, f64) {
        let editor = &*self.editor;
        let caret = self.layout.caret_bounds(editor.caret.position);
        let x = editor.caret.preferred_x.unwrap_or(caret.rect.x0);
        let line_height = if caret.line.height > 0.0 {
            caret.line.height
        } else {
            editor.config.font.line_height
        };
        let delta = match movement {
            Movement::PageUp | Movement::PageDown => {
                self.viewport.viewport_height().max(line_height)
            }
            _ => line_height,
        };
        let mut y = if movement.is_backward() {
            caret.rect.center_y() - delta
        } else {
            caret.rect.center_y() + delta
        };
        let last_line = self.layout.line_count().saturating_sub(1);
        if let Some(last) = self.layout.line_info(last_line) {
            y = y.min(last.bounds().center_y());
        }
        if let Some(first) = self.layout.line_info(0) {
            y = y.max(first.bounds().center_y());
        }
        let offset = self.layout.offset_at_point(x, y).min(editor.buffer.len());
        (
            editor.adjust_to_valid_position(offset, !movement.is_backward()),
            x,
        )
    }

    // --- MARK: Pointer navigation ---
    /// Collapse the selection and place the caret nearest to a point.
    pub fn move_to_point(&mut self, x: f64, y: f64) {
        let offset = self.hit_test(x, y);
        let mut this = self.editor.tracking_scope();
        this.selection.anchor = None;
        this.place_caret(offset, false);
        drop(this);
        self.scroll_caret_into_view(PendingScroll::NONE);
    }

    /// Move the caret to a point, keeping or creating the anchor.
    pub fn extend_selection_to_point(&mut self, x: f64, y: f64) {
        let offset = self.hit_test(x, y);
        let mut this = self.editor.tracking_scope();
        let anchor = this.selection.anchor.unwrap_or(this.caret.position);
        this.place_caret(offset, false);
        this.selection.anchor = Some(anchor);
        this.normalize_anchor();
        drop(this);
        self.scroll_caret_into_view(PendingScroll::NONE);
    }

    /// Select the token at a point, as for a double click.
    ///
    /// See [`FieldEditor::select_current_token`].
    pub fn select_word_at_point(&mut self, x: f64, y: f64) {
        let offset = self.hit_test(x, y);
        let mut this = self.editor.tracking_scope();
        this.selection.anchor = None;
        this.place_caret(offset, false);
        this.select_current_token();
        drop(this);
        self.scroll_caret_into_view(PendingScroll::NONE);
    }

    fn hit_test(&mut self, x: f64, y: f64) -> usize {
        self.refresh_layout();
        self.layout
            .offset_at_point(x, y)
            .min(self.editor.buffer.len())
    }

    // --- MARK: Geometry ---
    /// The rectangle to draw the caret in, or `None` if it is hidden.
    ///
    /// In overwrite mode the caret covers the glyph it will replace.
    pub fn caret_geometry(&mut self) -> Option<BoundingBox> {
        if !self.editor.caret_visible() {
            return None;
        }
        self.refresh_layout();
        let bounds = self.layout.caret_bounds(self.editor.caret.position);
        if self.editor.effective_insertion_mode() == InsertionMode::Overwrite {
            if let Some(glyph) = bounds.glyph {
                return Some(glyph);
            }
        }
        let rect = bounds.rect;
        Some(BoundingBox::new(
            rect.x0,
            rect.y0,
            rect.x0 + self.editor.config.caret_width,
            rect.y1,
        ))
    }
}
