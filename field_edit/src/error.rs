// Copyright 2026 the Field Edit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error returned when an editing call receives offsets outside the buffer.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the offending offsets and the
/// length of the buffer at the time of the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,

    /// The offending offset (or range start) in UTF-16 code units.
    index: usize,

    /// The requested length for range errors, `0` otherwise.
    count: usize,

    /// The length of the buffer in UTF-16 code units.
    len: usize,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports buffer length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The offset provided by the caller.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The range length provided by the caller, for [`ErrorKind::RangeOutOfBounds`].
    pub fn count(&self) -> usize {
        self.count
    }

    /// The length of the buffer at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::IndexOutOfBounds,
            index,
            count: 0,
            len,
        }
    }

    pub(crate) fn range_out_of_bounds(start: usize, count: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::RangeOutOfBounds,
            index: start,
            count,
            len,
        }
    }

    /// Checks that `index` is a valid caret position for a buffer of `len` units.
    pub(crate) fn check_index(index: usize, len: usize) -> Result<usize, Self> {
        if index > len {
            Err(Self::index_out_of_bounds(index, len))
        } else {
            Ok(index)
        }
    }

    /// Checks that `start..start + count` lies within a buffer of `len` units.
    pub(crate) fn check_range(start: usize, count: usize, len: usize) -> Result<usize, Self> {
        match start.checked_add(count) {
            Some(end) if start <= len && end <= len => Ok(end),
            _ => Err(Self::range_out_of_bounds(start, count, len)),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::IndexOutOfBounds => {
                write!(f, "offset {} out of bounds for len {}", self.index, self.len)
            }
            ErrorKind::RangeOutOfBounds => write!(
                f,
                "range of {} units at offset {} out of bounds for len {}",
                self.count, self.index, self.len
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An offset was greater than the buffer length.
    IndexOutOfBounds,

    /// A range extended past the end of the buffer.
    RangeOutOfBounds,
}
