// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::buffer::{is_line_break, TextBuffer};
use crate::editing::FieldEditor;
use crate::error::Error;
use crate::hooks::EditHooks;

/// How typed characters interact with the text after the caret.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum InsertionMode {
    /// Typed characters are inserted before the character at the caret.
    #[default]
    Insert,
    /// Typed characters replace the character at the caret.
    Overwrite,
}

impl InsertionMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Insert => Self::Overwrite,
            Self::Overwrite => Self::Insert,
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Caret {
    pub(crate) position: usize,
    pub(crate) mode: InsertionMode,
    /// Bumped whenever the blink cycle should restart.
    pub(crate) blink_resets: u32,
    /// Horizontal position kept across consecutive vertical movements.
    pub(crate) preferred_x: Option<f64>,
}

impl Caret {
    pub(crate) fn reset_blink(&mut self) {
        self.blink_resets = self.blink_resets.wrapping_add(1);
    }
}

/// Move `pos` off the middle of a `\r\n` sequence or a surrogate pair.
///
/// Inside a pair, the result is one unit forward when `move_forward` is set
/// and one unit back otherwise. Any other position is returned unchanged.
pub(crate) fn adjust_to_valid_position(
    buffer: &TextBuffer,
    pos: usize,
    move_forward: bool,
) -> usize {
    if !buffer.is_inside_pair(pos) {
        pos
    } else if move_forward {
        pos + 1
    } else {
        pos - 1
    }
}

impl<H> FieldEditor<H>
where
    H: EditHooks,
{
    /// Snap `pos` off the middle of a `\r\n` sequence or a surrogate pair,
    /// in the direction given by `move_forward`.
    ///
    /// Positions at the buffer boundaries, and any position not inside a
    /// pair, are returned unchanged. Applying the adjustment twice gives the
    /// same result as applying it once.
    pub fn adjust_to_valid_position(&self, pos: usize, move_forward: bool) -> usize {
        adjust_to_valid_position(&self.buffer, pos, move_forward)
    }

    /// Collapse the selection and place the caret at `pos`.
    ///
    /// A position inside a pair snaps backwards. See
    /// [`set_caret_directed`](Self::set_caret_directed) to choose the direction.
    pub fn set_caret(&mut self, pos: usize) -> Result<(), Error> {
        self.set_caret_directed(pos, false)
    }

    /// Collapse the selection and place the caret at `pos`, snapping forward
    /// out of a pair when `move_forward` is set.
    pub fn set_caret_directed(&mut self, pos: usize, move_forward: bool) -> Result<(), Error> {
        let pos = Error::check_index(pos, self.buffer.len())?;
        let mut this = self.tracking_scope();
        this.selection.anchor = None;
        this.place_caret(pos, move_forward);
        Ok(())
    }

    /// The stored insertion mode.
    pub fn insertion_mode(&self) -> InsertionMode {
        self.caret.mode
    }

    /// Switch between insert and overwrite mode.
    pub fn toggle_insertion_mode(&mut self) {
        self.caret.mode = self.caret.mode.toggled();
        self.generation.nudge();
    }

    /// The mode that typing actually uses.
    ///
    /// Overwrite falls back to insert while the caret is on a line break or
    /// the field is read-only.
    pub fn effective_insertion_mode(&self) -> InsertionMode {
        let on_line_break = self
            .buffer
            .get(self.caret.position)
            .is_some_and(is_line_break);
        let overwrite = self.caret.mode == InsertionMode::Overwrite;
        if overwrite && !on_line_break && !self.config.read_only {
            InsertionMode::Overwrite
        } else {
            InsertionMode::Insert
        }
    }

    /// Whether the caret should be drawn.
    pub fn caret_visible(&self) -> bool {
        !self.config.read_only || self.config.read_only_caret_visible
    }

    /// Counter incremented whenever the caret blink cycle should restart.
    ///
    /// Hosts compare it with the value seen when they last started their
    /// blink timer.
    pub fn blink_resets(&self) -> u32 {
        self.caret.blink_resets
    }

    /// Restart the caret blink cycle.
    pub fn reset_caret_blink(&mut self) {
        self.caret.reset_blink();
    }
}
