// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Deref, DerefMut};

use crate::editing::FieldEditor;
use crate::error::Error;
use crate::hooks::EditHooks;

/// Selection anchor plus the bookkeeping that coalesces change notifications.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct SelectionTracker {
    /// The fixed end of the selection. Never equal to the caret.
    pub(crate) anchor: Option<usize>,
    /// Number of open tracking scopes.
    depth: usize,
    /// `(caret, anchor-or-caret)` when the outermost scope opened.
    snapshot: (usize, usize),
}

impl SelectionTracker {
    fn state(&self, caret: usize) -> (usize, usize) {
        (caret, self.anchor.unwrap_or(caret))
    }

    pub(crate) fn begin(&mut self, caret: usize) {
        if self.depth == 0 {
            self.snapshot = self.state(caret);
        }
        self.depth += 1;
    }

    /// Close a scope, returning whether the outermost scope saw a change.
    pub(crate) fn end(&mut self, caret: usize) -> bool {
        assert!(
            self.depth > 0,
            "end_tracking called without a matching begin_tracking"
        );
        self.depth -= 1;
        self.depth == 0 && self.snapshot != self.state(caret)
    }
}

/// Guard returned by [`FieldEditor::tracking_scope`].
///
/// Dereferences to the editor. Selection changes made through it are
/// reported once, when the outermost scope is dropped.
#[derive(Debug)]
pub struct TrackingScope<'a, H>
where
    H: EditHooks,
{
    editor: &'a mut FieldEditor<H>,
}

impl<H> Deref for TrackingScope<'_, H>
where
    H: EditHooks,
{
    type Target = FieldEditor<H>;

    fn deref(&self) -> &Self::Target {
        self.editor
    }
}

impl<H> DerefMut for TrackingScope<'_, H>
where
    H: EditHooks,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.editor
    }
}

impl<H> Drop for TrackingScope<'_, H>
where
    H: EditHooks,
{
    fn drop(&mut self) {
        self.editor.end_tracking();
    }
}

impl<H> FieldEditor<H>
where
    H: EditHooks,
{
    // --- MARK: Change tracking ---
    /// Open a change-tracking scope.
    ///
    /// Scopes nest. The caret and anchor are captured when the outermost
    /// scope opens, and compared when it closes. Prefer
    /// [`tracking_scope`](Self::tracking_scope), which cannot be left open.
    pub fn begin_tracking(&mut self) {
        self.selection.begin(self.caret.position);
    }

    /// Close a change-tracking scope, raising
    /// [`EditHooks::selection_changed`] if this was the outermost scope and
    /// the caret or anchor differ from when it opened.
    ///
    /// # Panics
    ///
    /// Panics if no scope is open.
    pub fn end_tracking(&mut self) {
        if self.selection.end(self.caret.position) {
            log::trace!(
                target: "field_edit::selection",
                "selection changed: caret {}, anchor {:?}",
                self.caret.position,
                self.selection.anchor
            );
            self.generation.nudge();
            self.hooks.selection_changed();
        }
    }

    /// Open a change-tracking scope which closes when the guard is dropped.
    pub fn tracking_scope(&mut self) -> TrackingScope<'_, H> {
        self.begin_tracking();
        TrackingScope { editor: self }
    }

    // --- MARK: Selection ---
    /// Select `length` units starting at `start`.
    ///
    /// The start snaps backwards and the end forwards out of any pair they
    /// split. If both ends coincide, the selection is cleared and the caret
    /// placed there.
    pub fn select(&mut self, start: usize, length: usize) -> Result<(), Error> {
        let end = Error::check_range(start, length, self.buffer.len())?;
        let mut this = self.tracking_scope();
        this.select_range(start, end);
        Ok(())
    }

    /// Set the anchor at `anchor` and the caret at `caret`, snapping both outwards.
    pub(crate) fn select_range(&mut self, anchor: usize, caret: usize) {
        let anchor = self.adjust_to_valid_position(anchor, anchor > caret);
        self.place_caret(caret, caret >= anchor);
        self.selection.anchor = Some(anchor);
        self.normalize_anchor();
    }

    /// Select the whole text, leaving the caret at the end.
    pub fn select_all(&mut self) {
        let len = self.buffer.len();
        let mut this = self.tracking_scope();
        this.select_range(0, len);
    }

    /// Collapse the selection to the caret.
    pub fn clear_selection(&mut self) {
        let mut this = self.tracking_scope();
        this.selection.anchor = None;
    }

    /// Move the selection to begin at `start`, keeping its length where possible.
    ///
    /// The length is clamped to the text remaining after `start`.
    pub fn set_selection_start(&mut self, start: usize) -> Result<(), Error> {
        let start = Error::check_index(start, self.buffer.len())?;
        let length = self.selection_length().min(self.buffer.len() - start);
        let mut this = self.tracking_scope();
        this.select_range(start, start + length);
        Ok(())
    }

    /// Change the selection length, keeping its start.
    ///
    /// The length is clamped to the text remaining after the selection start.
    pub fn set_selection_length(&mut self, length: usize) {
        let start = self.selection_start();
        let length = length.min(self.buffer.len() - start);
        let mut this = self.tracking_scope();
        this.select_range(start, start + length);
    }
}
