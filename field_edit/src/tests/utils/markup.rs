// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// Note: This module is only compiled when running tests, which requires std,
// so we don't have to worry about being no_std-compatible.

use crate::{EditHooks, FieldEditor};

/// Marks the caret in markup strings.
pub(crate) const CARET: char = '|';
/// Marks the selection anchor in markup strings.
pub(crate) const ANCHOR: char = '^';

/// Split markup like `"ab^cd|ef"` into its text and the UTF-16 offsets of
/// the caret and the anchor.
///
/// Text without a caret marker puts the caret at the end.
///
/// # Panics
///
/// If a marker appears more than once.
#[track_caller]
pub(crate) fn parse_markup(markup: &str) -> (String, usize, Option<usize>) {
    let mut text = String::new();
    let mut offset = 0;
    let mut caret = None;
    let mut anchor = None;
    for ch in markup.chars() {
        let slot = match ch {
            CARET => &mut caret,
            ANCHOR => &mut anchor,
            _ => {
                text.push(ch);
                offset += ch.len_utf16();
                continue;
            }
        };
        assert!(slot.is_none(), "marker '{ch}' found twice in '{markup}'");
        *slot = Some(offset);
    }
    (text, caret.unwrap_or(offset), anchor)
}

/// Render the text of `editor` with the caret and anchor marked.
///
/// Comparing these strings gives failures which show where the caret and
/// anchor were, instead of bare offsets.
pub(crate) fn render_markup<H: EditHooks>(editor: &FieldEditor<H>) -> String {
    let units = editor.units();
    let mut markers = vec![(editor.caret(), CARET)];
    if let Some(anchor) = editor.selection_anchor() {
        markers.push((anchor, ANCHOR));
    }
    markers.sort_unstable();

    let mut out = String::new();
    let mut prev = 0;
    for (pos, marker) in markers {
        out.push_str(&String::from_utf16_lossy(&units[prev..pos]));
        out.push(marker);
        prev = pos;
    }
    out.push_str(&String::from_utf16_lossy(&units[prev..]));
    out
}

#[test]
fn markup_parses_markers() {
    assert_eq!(parse_markup("ab^cd|ef"), ("abcdef".to_string(), 4, Some(2)));
    assert_eq!(parse_markup("abc"), ("abc".to_string(), 3, None));
    assert_eq!(parse_markup("😀|x"), ("😀x".to_string(), 2, None));
}
