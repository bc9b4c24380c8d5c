// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-provided settings for an editor.

/// Case conversion applied to typed characters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CharacterCasing {
    /// Characters are stored as typed.
    #[default]
    Normal,
    /// Characters are converted to lower case.
    Lower,
    /// Characters are converted to upper case.
    Upper,
}

impl CharacterCasing {
    /// Apply the conversion to `ch`.
    ///
    /// Some conversions expand to more than one character (`'ß'` upper-cases to `"SS"`).
    pub(crate) fn apply(self, ch: char) -> CasedChars {
        match self {
            Self::Normal => CasedChars::Unchanged(Some(ch)),
            Self::Lower => CasedChars::Lower(ch.to_lowercase()),
            Self::Upper => CasedChars::Upper(ch.to_uppercase()),
        }
    }
}

/// Iterator over the characters produced by [`CharacterCasing::apply`].
#[derive(Clone, Debug)]
pub(crate) enum CasedChars {
    Unchanged(Option<char>),
    Lower(core::char::ToLowercase),
    Upper(core::char::ToUppercase),
}

impl Iterator for CasedChars {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self {
            Self::Unchanged(ch) => ch.take(),
            Self::Lower(chars) => chars.next(),
            Self::Upper(chars) => chars.next(),
        }
    }
}

/// Horizontal alignment of the text inside the field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TextAlignment {
    /// Lines start at the leading edge.
    #[default]
    Left,
    /// Lines are centered.
    Center,
    /// Lines end at the trailing edge.
    Right,
}

/// The font properties the editing core relies on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FontMetrics {
    /// Distance between consecutive baselines, in pixels.
    pub line_height: f64,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self { line_height: 16.0 }
    }
}

/// Settings of the text field that hosts the editor.
///
/// The editor never caches values derived from this struct; every
/// operation reads the current settings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Whether `\r` and `\n` are accepted as input.
    pub accepts_return: bool,
    /// Whether `\t` is accepted as input. Otherwise it is replaced by a space.
    pub accepts_tab: bool,
    /// Whether user editing commands are ignored.
    pub read_only: bool,
    /// Whether the caret is still shown while the field is read-only.
    pub read_only_caret_visible: bool,
    /// Maximum number of UTF-16 code units the field accepts from input.
    pub max_length: Option<usize>,
    /// Character stored in place of every typed character, e.g. for passwords.
    pub mask_character: Option<char>,
    /// Case conversion applied to typed characters.
    pub character_casing: CharacterCasing,
    /// Horizontal alignment of the text.
    pub text_alignment: TextAlignment,
    /// Font metrics used when the layout cannot answer a geometry question.
    pub font: FontMetrics,
    /// Width of the caret in pixels.
    pub caret_width: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            accepts_return: false,
            accepts_tab: false,
            read_only: false,
            read_only_caret_visible: false,
            max_length: None,
            mask_character: None,
            character_casing: CharacterCasing::Normal,
            text_alignment: TextAlignment::Left,
            font: FontMetrics::default(),
            caret_width: 1.0,
        }
    }
}

impl FieldConfig {
    /// Settings for a multi-line field which accepts returns and tabs.
    pub fn multi_line() -> Self {
        Self {
            accepts_return: true,
            accepts_tab: true,
            ..Self::default()
        }
    }

    /// Whether typed characters are replaced by a mask character.
    #[inline]
    pub fn is_masked(&self) -> bool {
        self.mask_character.is_some()
    }
}
