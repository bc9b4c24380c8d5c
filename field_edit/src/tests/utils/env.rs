// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::tests::utils::{parse_markup, render_markup};
use crate::{
    Clipboard, EditHooks, FieldConfig, FieldDriver, FieldEditor, MonospaceLayout, ScrollState,
};

/// A character event reported through [`EditHooks`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    Inserted(usize, char, bool),
    Deleted(usize, char, bool),
}

/// Hooks which record everything the editor reports.
#[derive(Clone, Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) events: Vec<Event>,
    pub(crate) selection_changes: usize,
    /// Characters for which this returns true are rejected by validation.
    pub(crate) reject: Option<fn(char) -> bool>,
}

impl EditHooks for Recorder {
    fn validate_char(&mut self, _offset: usize, ch: char) -> bool {
        !self.reject.is_some_and(|reject| reject(ch))
    }

    fn selection_changed(&mut self) {
        self.selection_changes += 1;
    }

    fn char_inserted(&mut self, offset: usize, ch: char, is_last: bool) {
        self.events.push(Event::Inserted(offset, ch, is_last));
    }

    fn char_deleted(&mut self, offset: usize, ch: char, is_last: bool) {
        self.events.push(Event::Deleted(offset, ch, is_last));
    }
}

/// An in-memory clipboard.
#[derive(Clone, Debug, Default)]
pub(crate) struct TestClipboard {
    pub(crate) text: Option<String>,
}

impl Clipboard for TestClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}

/// An editor together with the layout and viewport it is driven with.
///
/// Glyphs are [`TestEnv::ADVANCE`] wide and lines [`TestEnv::LINE_HEIGHT`]
/// tall.
pub(crate) struct TestEnv {
    pub(crate) editor: FieldEditor<Recorder>,
    pub(crate) layout: MonospaceLayout,
    pub(crate) viewport: ScrollState,
}

impl TestEnv {
    pub(crate) const ADVANCE: f64 = 10.0;
    pub(crate) const LINE_HEIGHT: f64 = 20.0;

    /// A single-line field showing `markup`.
    #[track_caller]
    pub(crate) fn new(markup: &str) -> Self {
        Self::with_config(FieldConfig::default(), markup)
    }

    /// A multi-line field showing `markup`.
    #[track_caller]
    pub(crate) fn multi_line(markup: &str) -> Self {
        Self::with_config(FieldConfig::multi_line(), markup)
    }

    /// A field with `config` showing `markup`; see [`parse_markup`].
    ///
    /// The recorded events and notifications are cleared after setup.
    #[track_caller]
    pub(crate) fn with_config(config: FieldConfig, markup: &str) -> Self {
        let (text, caret, anchor) = parse_markup(markup);
        let mut editor = FieldEditor::with_hooks(config, Recorder::default());
        editor.set_text(&text);
        assert_eq!(editor.text(), text, "setup text was filtered by the config");
        match anchor {
            Some(anchor) => editor.select_range(anchor, caret),
            None => editor.set_caret(caret).unwrap(),
        }
        let mut env = Self {
            editor,
            layout: MonospaceLayout::new(Self::ADVANCE, Self::LINE_HEIGHT),
            viewport: ScrollState::new(200.0, 100.0),
        };
        env.driver().refresh_layout();
        env.reset_records();
        env
    }

    pub(crate) fn driver(&mut self) -> FieldDriver<'_, Recorder, MonospaceLayout, ScrollState> {
        self.editor.driver(&mut self.layout, &mut self.viewport)
    }

    /// Forget the recorded events and notifications.
    pub(crate) fn reset_records(&mut self) {
        let hooks = self.editor.hooks_mut();
        hooks.events.clear();
        hooks.selection_changes = 0;
    }

    /// The events recorded since the last call.
    pub(crate) fn take_events(&mut self) -> Vec<Event> {
        core::mem::take(&mut self.editor.hooks_mut().events)
    }

    pub(crate) fn selection_changes(&self) -> usize {
        self.editor.hooks().selection_changes
    }

    /// Assert the text, caret and anchor, written as markup.
    #[track_caller]
    pub(crate) fn assert_state(&self, expected: &str) {
        assert_eq!(render_markup(&self.editor), expected);
    }
}
