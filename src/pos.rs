//! Position values for scanned characters.
//!
//! A [`Pos`] records one decoded character together with the half-open byte
//! range `start..end` it occupies in the scanner's buffer. Positions are
//! compact `Copy` values so they can be snapshotted freely for backtracking.

use std::fmt;

/// A decoded character and its byte range in the buffer.
///
/// Layout: 12 bytes total
/// - ch: char - the decoded character
/// - start: u32 - byte offset of the first byte
/// - end: u32 - byte offset one past the last byte (exclusive)
///
/// # Invariant
///
/// For positions produced by a scanner, `end - start` equals the UTF-8 width
/// of `ch` (1-4 bytes). The designated initial value [`Pos::ZERO`] is the
/// one exception: a null character with an empty `0..0` range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    /// The decoded character.
    pub ch: char,
    /// Byte offset of the first byte of the character.
    pub start: u32,
    /// Byte offset one past the last byte of the character (exclusive).
    pub end: u32,
}

/// Size assertion: Pos should be 12 bytes on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<Pos>() <= 12);

impl Pos {
    /// The initial cursor value: a null character at the empty range `0..0`.
    pub const ZERO: Pos = Pos {
        ch: '\0',
        start: 0,
        end: 0,
    };

    /// Create a new position.
    #[inline]
    pub const fn new(ch: char, start: u32, end: u32) -> Self {
        Pos { ch, start, end }
    }

    /// Byte width of the encoded character (`end - start`).
    ///
    /// 1-4 for scanner-produced positions, 0 for [`Pos::ZERO`].
    #[inline]
    pub const fn width(&self) -> u32 {
        self.end - self.start
    }

    /// Convert the byte range to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl Default for Pos {
    fn default() -> Self {
        Pos::ZERO
    }
}

/// Canonical text rendering: `{ <char> <start>:<end> }`.
///
/// Used for logging, debugging, and test fixtures; not a wire format.
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {} {}:{} }}", self.ch, self.start, self.end)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
