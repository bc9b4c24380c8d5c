// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editor state owner and its layout-aware driver.

use alloc::string::String;
use core::ops::Range;

use crate::buffer::TextBuffer;
use crate::config::FieldConfig;
use crate::editing::caret::{adjust_to_valid_position, Caret};
use crate::editing::scroll::{PendingScroll, Viewport};
use crate::editing::selection::SelectionTracker;
use crate::hooks::EditHooks;
use crate::layout::{LayoutBridge, LayoutState};

/// Opaque representation of a generation.
///
/// Obtained from [`FieldEditor::generation`].
// Overflow handling: the generations are only compared,
// so wrapping is fine. This could only fail if exactly
// `u32::MAX` generations happen between drawing
// operations. This is implausible and so can be ignored.
#[derive(PartialEq, Eq, Default, Clone, Copy, Debug)]
pub struct Generation(u32);

impl Generation {
    /// Make it not what it currently is.
    pub(crate) fn nudge(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Editing state of one text field.
///
/// Owns the text buffer, the caret and the selection, and applies the
/// field's [`FieldConfig`] to every edit. Operations which need geometry
/// (vertical movement, line boundaries, scrolling) live on [`FieldDriver`],
/// obtained through [`driver`](Self::driver).
///
/// Text mutations don't touch the layout; they mark it pending and the next
/// [`FieldDriver::refresh_layout`] recomputes it once, however many edits
/// happened in between.
#[derive(Clone, Debug)]
pub struct FieldEditor<H = ()>
where
    H: EditHooks,
{
    pub(crate) buffer: TextBuffer,
    pub(crate) caret: Caret,
    pub(crate) selection: SelectionTracker,
    pub(crate) config: FieldConfig,
    pub(crate) hooks: H,
    pub(crate) layout_state: LayoutState,
    /// Scroll intent recorded while the layout was pending.
    pub(crate) pending_scroll: Option<PendingScroll>,
    pub(crate) generation: Generation,
}

impl FieldEditor<()> {
    /// Create an empty editor with default settings and no hooks.
    pub fn new() -> Self {
        Self::with_hooks(FieldConfig::default(), ())
    }

    /// Create an empty editor with the given settings and no hooks.
    pub fn with_config(config: FieldConfig) -> Self {
        Self::with_hooks(config, ())
    }
}

impl Default for FieldEditor<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> FieldEditor<H>
where
    H: EditHooks,
{
    /// Create an empty editor reporting to `hooks`.
    pub fn with_hooks(config: FieldConfig, hooks: H) -> Self {
        Self {
            buffer: TextBuffer::new(),
            caret: Caret::default(),
            selection: SelectionTracker::default(),
            config,
            hooks,
            layout_state: LayoutState::PendingLayout,
            pending_scroll: None,
            // We don't use the `default` value to start with, as our consumers
            // will choose to use that as their initial value, but will probably need
            // to redraw if they haven't already.
            generation: Generation(1),
        }
    }

    /// Run a series of [`FieldDriver`] methods.
    pub fn driver<'drv, L, V>(
        &'drv mut self,
        layout: &'drv mut L,
        viewport: &'drv mut V,
    ) -> FieldDriver<'drv, H, L, V>
    where
        L: LayoutBridge,
        V: Viewport,
    {
        FieldDriver {
            editor: self,
            layout,
            viewport,
        }
    }

    // --- MARK: Settings ---
    /// The current settings.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Modify the settings.
    ///
    /// Marks the layout pending, as masking and font changes affect geometry.
    pub fn config_mut(&mut self) -> &mut FieldConfig {
        self.mark_layout_dirty();
        &mut self.config
    }

    /// Replace the settings.
    pub fn set_config(&mut self, config: FieldConfig) {
        self.config = config;
        self.mark_layout_dirty();
    }

    /// Whether typed text is stored as the mask character.
    pub fn is_masked(&self) -> bool {
        self.config.is_masked()
    }

    /// Borrow the hooks.
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Mutably borrow the hooks.
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    // --- MARK: Text ---
    /// Borrow the text buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// The UTF-16 code units of the text.
    pub fn units(&self) -> &[u16] {
        self.buffer.units()
    }

    /// The text, with unpaired surrogates replaced by U+FFFD.
    ///
    /// For masked fields this is the stored mask characters.
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Length of the text in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The buffer version, which changes whenever the text changes.
    pub fn version(&self) -> u64 {
        self.buffer.version()
    }

    /// Get the current `Generation` of the editor, to decide whether to draw.
    ///
    /// You should store the generation the editor was at when you last drew it, and then redraw
    /// when the generation is different (`Generation` is [`PartialEq`], so supports the equality `==` operation).
    pub fn generation(&self) -> Generation {
        self.generation
    }

    // --- MARK: Selection state ---
    /// The caret offset.
    pub fn caret(&self) -> usize {
        self.caret.position
    }

    /// The fixed end of the selection, if there is one.
    pub fn selection_anchor(&self) -> Option<usize> {
        self.selection.anchor
    }

    /// Start of the selection, or the caret if nothing is selected.
    pub fn selection_start(&self) -> usize {
        self.selection_range().start
    }

    /// Length of the selection in code units.
    pub fn selection_length(&self) -> usize {
        self.selection_range().len()
    }

    /// The selected range; empty at the caret if nothing is selected.
    pub fn selection_range(&self) -> Range<usize> {
        let caret = self.caret.position;
        let anchor = self.selection.anchor.unwrap_or(caret);
        anchor.min(caret)..anchor.max(caret)
    }

    /// Whether a non-empty range is selected.
    pub fn has_selection(&self) -> bool {
        !self.selection_range().is_empty()
    }

    /// The selected text, if the selection is not empty.
    pub fn selected_text(&self) -> Option<String> {
        let range = self.selection_range();
        (!range.is_empty()).then(|| self.buffer.slice(range))
    }

    // --- MARK: Layout state ---
    /// Whether the layout reflects the current text.
    pub fn layout_state(&self) -> LayoutState {
        self.layout_state
    }

    /// Mark the layout pending, e.g. after the host changed the available width.
    pub fn mark_layout_dirty(&mut self) {
        self.layout_state = LayoutState::PendingLayout;
    }

    /// The scroll request waiting for the next layout pass, if any.
    pub fn pending_scroll(&self) -> Option<PendingScroll> {
        self.pending_scroll
    }

    // --- MARK: Internal helpers ---
    /// Snap `pos` off the middle of a pair and place the caret there.
    pub(crate) fn place_caret(&mut self, pos: usize, move_forward: bool) {
        self.caret.position = adjust_to_valid_position(&self.buffer, pos, move_forward);
        self.caret.preferred_x = None;
        self.caret.reset_blink();
        self.normalize_anchor();
    }

    /// Drop an anchor which coincides with the caret.
    pub(crate) fn normalize_anchor(&mut self) {
        if self.selection.anchor == Some(self.caret.position) {
            self.selection.anchor = None;
        }
    }

    /// Record that the text changed: the layout is stale and must scroll to the caret once rebuilt.
    pub(crate) fn text_changed(&mut self) {
        self.mark_layout_dirty();
        self.generation.nudge();
        self.request_scroll(PendingScroll::NONE);
    }

    /// Ask for the caret to be scrolled into view once the layout is clean.
    pub(crate) fn request_scroll(&mut self, hints: PendingScroll) {
        let merged = match self.pending_scroll {
            Some(pending) => pending.union(hints),
            None => hints,
        };
        log::trace!(target: "field_edit::scroll", "deferring scroll to caret: {merged:?}");
        self.pending_scroll = Some(merged);
    }
}

/// A short-lived wrapper around [`FieldEditor`].
///
/// This can perform operations which require the layout to be up-to-date,
/// refreshing it as necessary, and scrolls the viewport to keep the caret
/// visible.
#[derive(Debug)]
pub struct FieldDriver<'a, H, L, V>
where
    H: EditHooks,
    L: LayoutBridge,
    V: Viewport,
{
    /// The editor being driven.
    pub editor: &'a mut FieldEditor<H>,
    /// Layout of the editor's text.
    pub layout: &'a mut L,
    /// The scrollable area showing the text.
    pub viewport: &'a mut V,
}

impl<H, L, V> FieldDriver<'_, H, L, V>
where
    H: EditHooks,
    L: LayoutBridge,
    V: Viewport,
{
    /// Update the layout if it is pending, then replay any deferred scroll request.
    pub fn refresh_layout(&mut self) {
        if !self.editor.layout_state.is_pending() {
            return;
        }
        self.layout.relayout(self.editor.buffer.units());
        self.editor.layout_state = LayoutState::Clean;
        if let Some(hints) = self.editor.pending_scroll.take() {
            log::trace!(target: "field_edit::scroll", "replaying deferred scroll: {hints:?}");
            self.scroll_caret_into_view(hints);
        }
    }

    /// Get the up-to-date layout for this driver.
    pub fn layout(&mut self) -> &L {
        self.refresh_layout();
        &*self.layout
    }
}
