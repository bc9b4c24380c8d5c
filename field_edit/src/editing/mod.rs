// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caret, selection, navigation and mutation of the text of one field.
//!
//! [`FieldEditor`] holds the state and implements everything that works on
//! code unit offsets alone. [`FieldDriver`] adds the operations which need
//! the layout or the viewport.

mod caret;
mod edit;
mod editor;
mod navigation;
mod scroll;
mod selection;

pub use caret::InsertionMode;
pub use editor::{FieldDriver, FieldEditor, Generation};
pub use navigation::Movement;
pub use scroll::{PendingScroll, ScrollState, Viewport};
pub use selection::TrackingScope;
