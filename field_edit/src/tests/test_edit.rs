// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::utils::{Event, TestClipboard, TestEnv};
use crate::{CharacterCasing, ErrorKind, FieldConfig, LayoutState, PendingScroll};

fn masked() -> FieldConfig {
    FieldConfig {
        mask_character: Some('•'),
        ..FieldConfig::default()
    }
}

#[test]
fn masked_input_stores_the_mask() {
    let mut env = TestEnv::with_config(masked(), "|");
    let inserted = env.editor.insert_text_at_position("secret", 0, false).unwrap();
    assert_eq!(inserted, 6);
    assert_eq!(env.editor.len(), 6);
    assert!(env.editor.units().iter().copied().eq("••••••".encode_utf16()));
    assert_eq!(env.editor.find_word(3), (0, 6));

    // Hooks see what was typed, not the mask.
    let events = env.take_events();
    assert_eq!(events.len(), 6);
    assert_eq!(events[0], Event::Inserted(0, 's', false));
    assert_eq!(events[5], Event::Inserted(5, 't', true));
}

#[test]
fn masked_fields_refuse_copy_and_cut() {
    let mut env = TestEnv::with_config(masked(), "|");
    env.editor.insert_text("hunter2");
    env.editor.select_all();
    let mut clipboard = TestClipboard::default();
    assert!(!env.editor.copy(&mut clipboard));
    assert!(!env.editor.cut(&mut clipboard));
    assert_eq!(clipboard.text, None);
    assert_eq!(env.editor.len(), 7);
}

#[test]
fn replacing_the_selection_notifies_once() {
    let mut env = TestEnv::new("abcdef|");
    env.editor.select(2, 2).unwrap();
    env.reset_records();

    env.editor.set_selected_text("X");
    env.assert_state("abX|ef");
    assert_eq!(env.selection_changes(), 1);
    assert_eq!(
        env.take_events(),
        [
            Event::Deleted(2, 'c', false),
            Event::Deleted(3, 'd', true),
            Event::Inserted(2, 'X', true),
        ]
    );
}

#[test]
fn max_length_drops_the_rest_of_the_input() {
    let config = FieldConfig {
        max_length: Some(3),
        ..FieldConfig::default()
    };
    let mut env = TestEnv::with_config(config, "ab|");
    let inserted = env.editor.insert_text_at_position("xyz", 2, false).unwrap();
    assert_eq!(inserted, 1);
    env.assert_state("abx|");
    assert_eq!(env.editor.insert_text("q"), 0);
    env.assert_state("abx|");
}

#[test]
fn single_line_filters_returns_and_tabs() {
    let mut env = TestEnv::new("|");
    env.editor.insert_text("a\r\nb\tc");
    env.assert_state("ab c|");

    let mut env = TestEnv::multi_line("|");
    env.editor.insert_text("a\r\nb\tc");
    env.assert_state("a\r\nb\tc|");
}

#[test]
fn casing_may_expand_characters() {
    let config = FieldConfig {
        character_casing: CharacterCasing::Upper,
        ..FieldConfig::default()
    };
    let mut env = TestEnv::with_config(config, "|");
    assert_eq!(env.editor.insert_text("aß"), 3);
    env.assert_state("ASS|");
    assert_eq!(
        env.take_events(),
        [
            Event::Inserted(0, 'A', false),
            Event::Inserted(1, 'S', false),
            Event::Inserted(2, 'S', true),
        ]
    );

    env.editor.config_mut().character_casing = CharacterCasing::Lower;
    env.editor.insert_text("QR");
    env.assert_state("ASSqr|");
}

#[test]
fn rejected_characters_are_skipped() {
    let mut env = TestEnv::new("|");
    env.editor.hooks_mut().reject = Some(|ch: char| ch.is_ascii_digit());
    let version = env.editor.version();
    assert_eq!(env.editor.insert_text("a1b2"), 2);
    env.assert_state("ab|");
    assert_ne!(env.editor.version(), version);

    let version = env.editor.version();
    assert_eq!(env.editor.insert_text("42"), 0);
    assert_eq!(env.editor.version(), version);
}

#[test]
fn overwrite_replaces_characters() {
    let mut env = TestEnv::new("a|bcd");
    env.editor.toggle_insertion_mode();
    assert_eq!(env.editor.insert_text("XY"), 2);
    env.assert_state("aXY|d");
    assert_eq!(
        env.take_events(),
        [
            Event::Deleted(1, 'b', false),
            Event::Deleted(2, 'c', true),
            Event::Inserted(1, 'X', false),
            Event::Inserted(2, 'Y', true),
        ]
    );

    // Past the end of the text, overwrite appends.
    env.editor.insert_text("ZW");
    env.assert_state("aXYZW|");
}

#[test]
fn overwrite_inserts_before_line_breaks() {
    let mut env = TestEnv::multi_line("ab|\ncd");
    env.editor.toggle_insertion_mode();
    env.editor.insert_text("X");
    env.assert_state("abX|\ncd");
}

#[test]
fn same_width_overwrite_fits_within_max_length() {
    let config = FieldConfig {
        max_length: Some(4),
        ..FieldConfig::default()
    };
    let mut env = TestEnv::with_config(config, "ab|cd");
    env.editor.toggle_insertion_mode();
    assert_eq!(env.editor.insert_text("XYZ"), 2);
    env.assert_state("abXY|");
}

#[test]
fn overwrite_with_a_wider_character_respects_max_length() {
    let config = FieldConfig {
        max_length: Some(2),
        ..FieldConfig::default()
    };
    let mut env = TestEnv::with_config(config, "|ab");
    env.editor.toggle_insertion_mode();
    assert_eq!(env.editor.insert_text("😀"), 0);
    env.assert_state("|ab");
    assert!(env.take_events().is_empty());

    // A narrower character may replace a wider one.
    let mut env = TestEnv::with_config(config, "|😀b");
    env.editor.toggle_insertion_mode();
    assert_eq!(env.editor.insert_text("xyz"), 2);
    env.assert_state("xy|");
}

#[test]
fn insertion_after_the_selection_shifts_left() {
    let mut env = TestEnv::new("a^bc|def");
    env.editor.insert_text_at_position("Z", 5, false).unwrap();
    env.assert_state("a|deZf");

    let mut env = TestEnv::new("a^bcd|ef");
    env.editor.insert_text_at_position("Z", 2, true).unwrap();
    env.assert_state("aZ|ef");
}

#[test]
fn insertion_moves_a_caret_after_it() {
    let mut env = TestEnv::new("ab|c");
    env.editor.insert_text_at_position("XY", 0, false).unwrap();
    env.assert_state("XYab|c");
    env.editor.insert_text_at_position("Q", 5, false).unwrap();
    env.assert_state("XYab|cQ");
    assert_eq!(
        env.editor
            .insert_text_at_position("Q", 8, false)
            .unwrap_err()
            .kind(),
        ErrorKind::IndexOutOfBounds
    );
}

#[test]
fn delete_ahead_removes_crlf_whole() {
    let mut env = TestEnv::multi_line("ab|\r\ncd");
    let version = env.editor.version();
    assert!(env.editor.delete_ahead());
    env.assert_state("ab|cd");
    assert_ne!(env.editor.version(), version);
    assert_eq!(
        env.take_events(),
        [Event::Deleted(2, '\r', false), Event::Deleted(3, '\n', true)]
    );
}

#[test]
fn delete_behind_removes_surrogate_pairs_whole() {
    let mut env = TestEnv::new("a😀|b");
    assert!(env.editor.delete_behind());
    env.assert_state("a|b");
    assert_eq!(env.take_events(), [Event::Deleted(1, '😀', true)]);

    let mut env = TestEnv::multi_line("ab\r\n|cd");
    assert!(env.editor.delete_behind());
    env.assert_state("ab|cd");
}

#[test]
fn deleting_at_the_edges_does_nothing() {
    let mut env = TestEnv::new("abc|");
    let version = env.editor.version();
    assert!(!env.editor.delete_ahead());
    env.editor.set_caret(0).unwrap();
    assert!(!env.editor.delete_behind());
    assert!(!env.editor.delete_selection());
    assert_eq!(env.editor.version(), version);
    assert!(env.take_events().is_empty());
}

#[test]
fn deletion_prefers_the_selection() {
    let mut env = TestEnv::new("a^bc|d");
    assert!(env.editor.delete_ahead());
    env.assert_state("a|d");

    let mut env = TestEnv::new("a|bc^d");
    assert!(env.editor.delete_behind());
    env.assert_state("a|d");
    assert_eq!(env.selection_changes(), 1);
}

#[test]
fn delete_span_grows_over_pairs() {
    let mut env = TestEnv::new("abcdef|");
    env.editor.delete_span(1, 2).unwrap();
    env.assert_state("adef|");

    let mut env = TestEnv::multi_line("ab\r\ncd|");
    env.editor.delete_span(3, 2).unwrap();
    env.assert_state("abd|");
    assert_eq!(
        env.editor.delete_span(2, 5).unwrap_err().kind(),
        ErrorKind::RangeOutOfBounds
    );
}

#[test]
fn empty_delete_span_inside_a_pair_deletes_nothing() {
    let mut env = TestEnv::multi_line("ab\r\ncd|");
    let version = env.editor.version();
    env.editor.delete_span(3, 0).unwrap();
    env.assert_state("ab\r\ncd|");
    assert_eq!(env.editor.version(), version);
    assert!(env.take_events().is_empty());
    assert_eq!(env.selection_changes(), 0);
}

#[test]
fn deletion_keeps_the_anchor_on_its_text() {
    let mut env = TestEnv::new("ab^cdef|");
    env.editor.delete_span(0, 1).unwrap();
    env.assert_state("b^cdef|");
    env.editor.delete_span(0, 3).unwrap();
    env.assert_state("^ef|");
}

#[test]
fn deletion_never_leaves_the_caret_inside_a_new_pair() {
    let mut env = TestEnv::multi_line("\r|X\n");
    assert!(env.editor.delete_ahead());
    env.assert_state("|\r\n");
}

#[test]
fn word_deletion() {
    let mut env = TestEnv::new("hello world|");
    assert!(env.editor.delete_word_behind());
    env.assert_state("hello |");
    assert!(env.editor.delete_word_behind());
    env.assert_state("|");
    assert!(!env.editor.delete_word_behind());

    let mut env = TestEnv::new("|hello world");
    assert!(env.editor.delete_word_ahead());
    env.assert_state("| world");
    assert!(env.editor.delete_word_ahead());
    env.assert_state("|");
    assert!(!env.editor.delete_word_ahead());
}

#[test]
fn read_only_refuses_user_commands() {
    let config = FieldConfig {
        read_only: true,
        ..FieldConfig::default()
    };
    let mut env = TestEnv::with_config(config, "a^bc|d");
    let mut clipboard = TestClipboard {
        text: Some("pasted".into()),
    };
    assert_eq!(env.editor.insert_text("x"), 0);
    assert!(!env.editor.delete_ahead());
    assert!(!env.editor.delete_behind());
    assert!(!env.editor.delete_word_ahead());
    assert!(!env.editor.delete_word_behind());
    assert!(!env.editor.cut(&mut clipboard));
    assert!(!env.editor.paste(&mut clipboard));
    env.assert_state("a^bc|d");

    // Copying doesn't modify anything.
    assert!(env.editor.copy(&mut clipboard));
    assert_eq!(clipboard.text.as_deref(), Some("bc"));

    // Programmatic edits still apply.
    env.editor.set_selected_text("X");
    env.assert_state("aX|d");
}

#[test]
fn clipboard_round_trip() {
    let mut env = TestEnv::new("a^bc|d");
    let mut clipboard = TestClipboard::default();
    assert!(env.editor.copy(&mut clipboard));
    assert_eq!(clipboard.text.as_deref(), Some("bc"));
    assert!(env.editor.cut(&mut clipboard));
    env.assert_state("a|d");
    assert!(!env.editor.copy(&mut clipboard));

    clipboard.text = Some("XY".into());
    assert!(env.editor.paste(&mut clipboard));
    env.assert_state("aXY|d");

    clipboard.text = None;
    assert!(!env.editor.paste(&mut clipboard));
}

#[test]
fn paste_replaces_the_selection_even_in_overwrite_mode() {
    let mut env = TestEnv::new("ab^cd|ef");
    env.editor.toggle_insertion_mode();
    let mut clipboard = TestClipboard {
        text: Some("1".into()),
    };
    assert!(env.editor.paste(&mut clipboard));
    env.assert_state("ab1|ef");
}

#[test]
fn set_text_replaces_everything() {
    let mut env = TestEnv::new("a^b|c");
    env.editor.set_text("hello");
    env.assert_state("hello|");
    assert_eq!(env.selection_changes(), 1);
    let events = env.take_events();
    assert_eq!(events[0], Event::Deleted(0, 'a', false));
    assert_eq!(events[2], Event::Deleted(2, 'c', true));
    assert_eq!(events[3], Event::Inserted(0, 'h', false));
    assert_eq!(events[7], Event::Inserted(4, 'o', true));
    // The deletions and the insertions each close their own batch.
    let batch_ends = events
        .iter()
        .filter(|event| matches!(event, Event::Deleted(.., true) | Event::Inserted(.., true)))
        .count();
    assert_eq!(batch_ends, 2);

    assert_eq!(env.editor.layout_state(), LayoutState::PendingLayout);
    let pending = env.editor.pending_scroll().unwrap();
    assert!(pending.contains(PendingScroll::SHOW_MAXIMUM_LINE_WIDTH));
}

#[test]
fn clear_removes_everything() {
    let mut env = TestEnv::new("ab|c");
    let generation = env.editor.generation();
    env.editor.clear();
    env.assert_state("|");
    assert!(env.editor.is_empty());
    assert_ne!(env.editor.generation(), generation);
}

#[test]
fn edits_mark_the_layout_pending() {
    let mut env = TestEnv::new("ab|c");
    assert_eq!(env.editor.layout_state(), LayoutState::Clean);
    env.editor.insert_text("x");
    env.editor.insert_text("y");
    assert_eq!(env.editor.layout_state(), LayoutState::PendingLayout);
    env.driver().refresh_layout();
    assert_eq!(env.editor.layout_state(), LayoutState::Clean);
    assert_eq!(env.editor.pending_scroll(), None);
}

#[test]
fn version_changes_only_with_content() {
    let mut env = TestEnv::new("ab|c");
    let version = env.editor.version();
    env.editor.insert_text("");
    env.editor.set_caret(0).unwrap();
    env.editor.select_all();
    assert_eq!(env.editor.version(), version);
    env.editor.insert_text("z");
    assert_ne!(env.editor.version(), version);
}
