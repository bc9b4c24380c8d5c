// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::buffer::is_line_break;
use crate::editing::caret::adjust_to_valid_position;
use crate::editing::{FieldEditor, InsertionMode, PendingScroll};
use crate::error::Error;
use crate::hooks::{Clipboard, EditHooks};

/// Report a batch of character events, flagging the final one.
fn fire(events: Vec<(usize, char)>, mut f: impl FnMut(usize, char, bool)) {
    let count = events.len();
    for (i, (offset, ch)) in events.into_iter().enumerate() {
        f(offset, ch, i + 1 == count);
    }
}

impl<H> FieldEditor<H>
where
    H: EditHooks,
{
    // --- MARK: User commands ---
    /// Type `text` at the caret, replacing the selection if there is one.
    ///
    /// Uses the [effective insertion mode](Self::effective_insertion_mode).
    /// Does nothing for read-only fields. Returns the number of code units
    /// inserted.
    pub fn insert_text(&mut self, text: &str) -> usize {
        if self.config.read_only {
            return 0;
        }
        let overwrite = self.effective_insertion_mode() == InsertionMode::Overwrite;
        let position = self.caret.position;
        let mut this = self.tracking_scope();
        this.insert_chars(text, position, overwrite)
    }

    /// Delete the selection, or the character after the caret.
    ///
    /// A `\r\n` sequence or a surrogate pair is deleted as a whole. Returns
    /// whether anything was deleted; read-only fields are never changed.
    pub fn delete_ahead(&mut self) -> bool {
        if self.config.read_only {
            return false;
        }
        let mut this = self.tracking_scope();
        if this.delete_selection() {
            return true;
        }
        let caret = this.caret.position;
        let len = this.buffer.element_len_after(caret);
        this.caret.reset_blink();
        if len == 0 {
            return false;
        }
        this.remove_span(caret, caret + len);
        true
    }

    /// Delete the selection, or the character before the caret.
    ///
    /// A `\r\n` sequence or a surrogate pair is deleted as a whole. Returns
    /// whether anything was deleted; read-only fields are never changed.
    pub fn delete_behind(&mut self) -> bool {
        if self.config.read_only {
            return false;
        }
        let mut this = self.tracking_scope();
        if this.delete_selection() {
            return true;
        }
        let caret = this.caret.position;
        let len = this.buffer.element_len_before(caret);
        this.caret.reset_blink();
        if len == 0 {
            return false;
        }
        this.remove_span(caret - len, caret);
        true
    }

    /// Delete the selection, or from the caret to the end of the word.
    pub fn delete_word_ahead(&mut self) -> bool {
        if self.config.read_only {
            return false;
        }
        let mut this = self.tracking_scope();
        if this.delete_selection() {
            return true;
        }
        let caret = this.caret.position;
        let (_, end) = this.find_word(caret);
        if end <= caret {
            return false;
        }
        this.remove_span(caret, end);
        true
    }

    /// Delete the selection, or from the start of the word to the caret.
    pub fn delete_word_behind(&mut self) -> bool {
        if self.config.read_only {
            return false;
        }
        let mut this = self.tracking_scope();
        if this.delete_selection() {
            return true;
        }
        let caret = this.caret.position;
        let (start, _) = this.find_word(caret);
        if start >= caret {
            return false;
        }
        this.remove_span(start, caret);
        true
    }

    // --- MARK: Clipboard ---
    /// Put the selected text on the clipboard.
    ///
    /// Refused for masked fields and empty selections.
    pub fn copy(&self, clipboard: &mut impl Clipboard) -> bool {
        if self.is_masked() {
            return false;
        }
        match self.selected_text() {
            Some(text) => {
                clipboard.set_text(&text);
                true
            }
            None => false,
        }
    }

    /// Move the selected text to the clipboard.
    ///
    /// Refused for masked or read-only fields and for empty selections.
    pub fn cut(&mut self, clipboard: &mut impl Clipboard) -> bool {
        if self.config.read_only || !self.copy(clipboard) {
            return false;
        }
        self.delete_selection()
    }

    /// Insert the clipboard text at the caret, replacing the selection.
    ///
    /// Pasted text is always inserted, never overwritten.
    pub fn paste(&mut self, clipboard: &mut impl Clipboard) -> bool {
        if self.config.read_only {
            return false;
        }
        let Some(text) = clipboard.get_text() else {
            return false;
        };
        let position = self.caret.position;
        let mut this = self.tracking_scope();
        this.insert_chars(&text, position, false);
        true
    }

    // --- MARK: Programmatic edits ---
    /// Insert `text` at `position`, replacing the selection if there is one.
    ///
    /// Characters go through the field's filters: line breaks are dropped
    /// unless returns are accepted, tabs become spaces unless tabs are
    /// accepted, the casing is applied and [`EditHooks::validate_char`] may
    /// veto each one. Input stops at the maximum length. With `overwrite`,
    /// each character replaces the one at the insertion point.
    ///
    /// Returns the number of code units inserted.
    pub fn insert_text_at_position(
        &mut self,
        text: &str,
        position: usize,
        overwrite: bool,
    ) -> Result<usize, Error> {
        let position = Error::check_index(position, self.buffer.len())?;
        let position = self.adjust_to_valid_position(position, false);
        let mut this = self.tracking_scope();
        Ok(this.insert_chars(text, position, overwrite))
    }

    /// Replace the selection with `text`, leaving the caret after it.
    pub fn set_selected_text(&mut self, text: &str) -> usize {
        let mut this = self.tracking_scope();
        this.delete_selection();
        let position = this.caret.position;
        this.insert_chars(text, position, false)
    }

    /// Replace the whole text, placing the caret at its end.
    pub fn set_text(&mut self, text: &str) {
        let mut this = self.tracking_scope();
        let len = this.buffer.len();
        this.remove_span(0, len);
        this.insert_chars(text, 0, false);
        let end = this.buffer.len();
        this.place_caret(end, true);
        this.request_scroll(PendingScroll::SHOW_MAXIMUM_LINE_WIDTH);
    }

    /// Remove all text.
    pub fn clear(&mut self) {
        let mut this = self.tracking_scope();
        let len = this.buffer.len();
        this.remove_span(0, len);
    }

    /// Delete the selected text. Returns false if nothing was selected.
    pub fn delete_selection(&mut self) -> bool {
        let range = self.selection_range();
        if range.is_empty() {
            return false;
        }
        let mut this = self.tracking_scope();
        this.remove_span(range.start, range.end);
        true
    }

    /// Delete `length` units starting at `start`.
    ///
    /// A non-empty range grows outwards to whole `\r\n` sequences and
    /// surrogate pairs. An empty range deletes nothing.
    pub fn delete_span(&mut self, start: usize, length: usize) -> Result<(), Error> {
        let end = Error::check_range(start, length, self.buffer.len())?;
        if length == 0 {
            return Ok(());
        }
        let start = self.adjust_to_valid_position(start, false);
        let end = self.adjust_to_valid_position(end, true);
        let mut this = self.tracking_scope();
        this.remove_span(start, end);
        Ok(())
    }

    // --- MARK: Mutation core ---
    /// Remove `start..end`, keeping the caret and anchor on the same text.
    pub(crate) fn remove_span(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let removed = self.buffer.remove(start, end - start);

        let mut offset = start;
        let events = char::decode_utf16(removed.iter().copied())
            .map(|decoded| {
                let (ch, len) = match decoded {
                    Ok(ch) => (ch, ch.len_utf16()),
                    Err(_) => (char::REPLACEMENT_CHARACTER, 1),
                };
                let at = offset;
                offset += len;
                (at, ch)
            })
            .collect();
        fire(events, |offset, ch, is_last| {
            self.hooks.char_deleted(offset, ch, is_last);
        });

        let shift = |pos: usize| {
            if pos >= end {
                pos - (end - start)
            } else {
                pos.min(start)
            }
        };
        self.caret.position =
            adjust_to_valid_position(&self.buffer, shift(self.caret.position), false);
        self.selection.anchor = self
            .selection
            .anchor
            .map(|anchor| adjust_to_valid_position(&self.buffer, shift(anchor), false));
        self.caret.preferred_x = None;
        self.normalize_anchor();
        self.text_changed();
    }

    /// The insertion pipeline shared by every text-adding operation.
    pub(crate) fn insert_chars(&mut self, text: &str, position: usize, overwrite: bool) -> usize {
        let mut position = position;
        let mut overwrite = overwrite;
        let selection = self.selection_range();
        if !selection.is_empty() {
            log::trace!(target: "field_edit::edit", "replacing selection {selection:?}");
            self.remove_span(selection.start, selection.end);
            if position >= selection.end {
                position -= selection.len();
            } else if position > selection.start {
                position = selection.start;
            }
            overwrite = false;
        }

        let config = self.config;
        let caret_before = self.caret.position;
        let start = position;
        let mut inserted = 0;
        let mut removed = 0;
        let mut inserted_events = Vec::new();
        let mut deleted_events = Vec::new();
        let mut encoded = [0_u16; 2];

        'input: for ch in text.chars() {
            if matches!(ch, '\r' | '\n') && !config.accepts_return {
                continue;
            }
            let ch = if ch == '\t' && !config.accepts_tab {
                ' '
            } else {
                ch
            };
            for ch in config.character_casing.apply(ch) {
                if !self.hooks.validate_char(position, ch) {
                    log::trace!(target: "field_edit::edit", "rejected {ch:?} at {position}");
                    continue;
                }
                let stored = config.mask_character.unwrap_or(ch);
                let units = stored.encode_utf16(&mut encoded);
                let existing = self.buffer.element_len_after(position);
                let replaces =
                    overwrite && existing > 0 && !is_line_break(self.buffer.char_at(position));
                let replaced = if replaces { existing } else { 0 };
                if config
                    .max_length
                    .is_some_and(|max| self.buffer.len() - replaced + units.len() > max)
                {
                    log::debug!(
                        target: "field_edit::edit",
                        "maximum length reached, dropping the rest of the input"
                    );
                    break 'input;
                }
                if replaces {
                    let old = self
                        .buffer
                        .code_point_at(position)
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    self.buffer.remove(position, existing);
                    removed += existing;
                    deleted_events.push((position, old));
                }
                self.buffer.insert(units, position);
                inserted_events.push((position, ch));
                position += units.len();
                inserted += units.len();
            }
        }

        if start <= caret_before {
            let caret = if caret_before <= start + removed {
                start + inserted
            } else {
                caret_before - removed + inserted
            };
            self.caret.position = adjust_to_valid_position(&self.buffer, caret, true);
            self.normalize_anchor();
        }

        fire(deleted_events, |offset, ch, is_last| {
            self.hooks.char_deleted(offset, ch, is_last);
        });
        fire(inserted_events, |offset, ch, is_last| {
            self.hooks.char_inserted(offset, ch, is_last);
        });

        if inserted > 0 || removed > 0 {
            self.text_changed();
        }
        self.caret.preferred_x = None;
        self.caret.reset_blink();
        inserted
    }
}
