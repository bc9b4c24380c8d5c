// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Callbacks through which an editor reports to its host.
///
/// Every method has a no-op default, so hosts only implement what they
/// observe. `()` implements the trait with all defaults.
pub trait EditHooks {
    /// Decide whether `ch` may be inserted at `offset`.
    ///
    /// Rejected characters are skipped; the rest of the input is still processed.
    /// `ch` is the character after case conversion but before masking.
    fn validate_char(&mut self, offset: usize, ch: char) -> bool {
        let _ = (offset, ch);
        true
    }

    /// The caret or the selection anchor changed.
    ///
    /// Raised at most once per editor operation.
    fn selection_changed(&mut self) {}

    /// `ch` was inserted at `offset`.
    ///
    /// For masked fields `ch` is the character that was typed, not the mask.
    /// `is_last` is set on the final character of each batch of insertions,
    /// so hosts can defer expensive work until a batch completes. An
    /// operation reports its deletions as one batch before its insertions
    /// as another, so replacing text flags one event of each kind.
    fn char_inserted(&mut self, offset: usize, ch: char, is_last: bool) {
        let _ = (offset, ch, is_last);
    }

    /// `ch` was removed from `offset`.
    ///
    /// `is_last` is set on the final character of each batch of deletions.
    /// See [`char_inserted`](Self::char_inserted) for how batches are formed.
    fn char_deleted(&mut self, offset: usize, ch: char, is_last: bool) {
        let _ = (offset, ch, is_last);
    }
}

impl EditHooks for () {}

/// Plain-text clipboard access.
pub trait Clipboard {
    /// The current clipboard text, if any.
    fn get_text(&mut self) -> Option<String>;

    /// Replace the clipboard contents.
    fn set_text(&mut self, text: &str);
}
