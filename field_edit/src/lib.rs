// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field Edit is the editing core behind a plain text field.
//!
//! It owns a UTF-16 text buffer together with the caret, the selection and
//! the rules for mutating them: word, line and page navigation, masked and
//! overwrite insertion, per-character validation, length limits, and the
//! decision of how far a viewport has to scroll to keep the caret visible.
//!
//! Text shaping is not done here. Geometry comes from a [`LayoutBridge`]
//! supplied by the host (or the bundled [`MonospaceLayout`]), and scrolling
//! is applied through a [`Viewport`].
//!
//! ## Usage
//!
//! ```
//! use field_edit::{FieldEditor, MonospaceLayout, Movement, ScrollState};
//!
//! let mut editor: FieldEditor = FieldEditor::new();
//! editor.set_text("hello world");
//!
//! let mut layout = MonospaceLayout::new(8.0, 16.0);
//! let mut viewport = ScrollState::new(200.0, 40.0);
//! let mut driver = editor.driver(&mut layout, &mut viewport);
//! driver.move_caret(Movement::Home { absolute: true }, false);
//! driver.move_caret(Movement::NextWord, true);
//!
//! assert_eq!(editor.selected_text().as_deref(), Some("hello"));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod buffer;
mod config;
mod error;
mod hooks;

pub mod editing;
pub mod layout;

#[cfg(test)]
mod tests;

pub use crate::buffer::TextBuffer;
pub use crate::config::{CharacterCasing, FieldConfig, FontMetrics, TextAlignment};
pub use crate::editing::{
    FieldDriver, FieldEditor, Generation, InsertionMode, Movement, PendingScroll, ScrollState,
    TrackingScope, Viewport,
};
pub use crate::error::{Error, ErrorKind};
pub use crate::hooks::{Clipboard, EditHooks};
pub use crate::layout::{
    BoundingBox, GlyphBounds, InsertionBounds, LayoutBridge, LayoutState, LineInfo,
    MonospaceLayout,
};
