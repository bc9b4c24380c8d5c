// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The versioned UTF-16 text store behind an editor.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

pub(crate) const CR: u16 = b'\r' as u16;
pub(crate) const LF: u16 = b'\n' as u16;

#[inline]
pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

#[inline]
pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

#[inline]
pub(crate) fn is_line_break(unit: u16) -> bool {
    unit == CR || unit == LF
}

/// An ordered, mutable sequence of UTF-16 code units.
///
/// Every mutation that changes the contents bumps [`version`](Self::version).
/// Offsets are not validated beyond bounds checks; keeping carets off the
/// middle of surrogate pairs and `\r\n` sequences is the editor's job.
#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    units: Vec<u16>,
    version: u64,
}

impl TextBuffer {
    /// Creates an empty buffer at version `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of UTF-16 code units in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the buffer holds no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Monotonic counter, incremented by every mutation that changed the contents.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Borrow the raw code units.
    #[inline]
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// The code unit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn char_at(&self, index: usize) -> u16 {
        self.units[index]
    }

    /// The code unit at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u16> {
        self.units.get(index).copied()
    }

    /// Decode the buffer, replacing unpaired surrogates with U+FFFD.
    pub fn text(&self) -> String {
        decode_lossy(&self.units)
    }

    /// Decode a range of the buffer, replacing unpaired surrogates with U+FFFD.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    pub fn slice(&self, range: Range<usize>) -> String {
        decode_lossy(&self.units[range])
    }

    /// Insert `text` before the unit at `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len()`.
    pub fn insert(&mut self, text: &[u16], at: usize) {
        assert!(
            at <= self.units.len(),
            "insert offset {at} out of bounds for len {}",
            self.units.len()
        );
        if text.is_empty() {
            return;
        }
        self.units.splice(at..at, text.iter().copied());
        self.version += 1;
    }

    /// Remove `length` units starting at `at`, returning them.
    ///
    /// # Panics
    ///
    /// Panics if `at + length > len()`.
    pub fn remove(&mut self, at: usize, length: usize) -> Vec<u16> {
        assert!(
            at.checked_add(length)
                .is_some_and(|end| end <= self.units.len()),
            "remove range {at}+{length} out of bounds for len {}",
            self.units.len()
        );
        if length == 0 {
            return Vec::new();
        }
        self.version += 1;
        self.units.drain(at..at + length).collect()
    }

    /// Remove all text.
    pub fn clear(&mut self) {
        if !self.units.is_empty() {
            self.units.clear();
            self.version += 1;
        }
    }

    // --- MARK: Unit classification ---

    /// Whether `pos` sits strictly between the halves of a `\r\n` sequence
    /// or a surrogate pair.
    pub(crate) fn is_inside_pair(&self, pos: usize) -> bool {
        if pos == 0 || pos >= self.units.len() {
            return false;
        }
        let prev = self.units[pos - 1];
        let next = self.units[pos];
        (prev == CR && next == LF) || (is_high_surrogate(prev) && is_low_surrogate(next))
    }

    /// Length of the text element starting at `pos`: `2` for `\r\n` and
    /// surrogate pairs, `1` otherwise, `0` at the end of the buffer.
    pub(crate) fn element_len_after(&self, pos: usize) -> usize {
        match self.units.get(pos) {
            None => 0,
            Some(_) if self.is_inside_pair(pos + 1) => 2,
            Some(_) => 1,
        }
    }

    /// Length of the text element ending at `pos`: `2` for `\r\n` and
    /// surrogate pairs, `1` otherwise, `0` at the start of the buffer.
    pub(crate) fn element_len_before(&self, pos: usize) -> usize {
        if pos == 0 {
            0
        } else if pos >= 2 && self.is_inside_pair(pos - 1) {
            2
        } else {
            1
        }
    }

    /// The code point that the unit at `index` belongs to.
    ///
    /// Surrogate halves decode together with their partner; unpaired
    /// surrogates decode to U+FFFD.
    pub(crate) fn code_point_at(&self, index: usize) -> Option<char> {
        let unit = self.get(index)?;
        let pair = if is_high_surrogate(unit) {
            self.get(index + 1)
                .filter(|next| is_low_surrogate(*next))
                .map(|next| [unit, next])
        } else if is_low_surrogate(unit) && index > 0 {
            Some(self.units[index - 1])
                .filter(|prev| is_high_surrogate(*prev))
                .map(|prev| [prev, unit])
        } else {
            None
        };
        let decoded = match pair {
            Some(pair) => char::decode_utf16(pair).next(),
            None => char::decode_utf16([unit]).next(),
        };
        Some(decoded.and_then(Result::ok).unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}

fn decode_lossy(units: &[u16]) -> String {
    char::decode_utf16(units.iter().copied())
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
