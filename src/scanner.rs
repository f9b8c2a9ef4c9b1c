//! Stateful, rewindable scanner over a decoded byte buffer.
//!
//! The scanner owns its buffer, a cursor [`Pos`], and an ordered list of
//! decode-error records. [`Scanner::scan`] advances the cursor one Unicode
//! character at a time; [`Scanner::token`] materializes the cursor;
//! [`Scanner::reset`] and [`Scanner::goto`] rewind it. Malformed input is
//! recorded rather than raised, so callers can drain everything scannable
//! and inspect [`Scanner::errors`] afterwards.
//!
//! # Cursor model
//!
//! The cursor marks the most recently decoded character; its `end` offset
//! is the next unread byte. The scanner starts at [`Pos::ZERO`] (nothing
//! decoded yet, next read at offset 0). The cursor only ever lands on
//! boundaries produced by successful decodes — a malformed sequence halts
//! forward progress at that exact offset until the caller repositions.

use std::io::Read;
use std::sync::Arc;

use crate::error::{EncodingError, SourceError};
use crate::pos::Pos;
use crate::token::Token;

/// Outcome of a single scan step.
///
/// `Exhausted` and `Malformed` are both falsy under
/// [`advanced()`](Step::advanced), which keeps the conventional
/// `while scanner.scan().advanced()` loop while still letting callers tell
/// end-of-input apart from a decode error without touching the error list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The cursor moved forward by one character.
    Advanced,
    /// No more input; the cursor is at or past the end of the buffer.
    Exhausted,
    /// The bytes at the cursor do not decode; an [`EncodingError`] was
    /// recorded and the cursor did not move.
    Malformed,
}

impl Step {
    /// Returns `true` only for [`Step::Advanced`].
    #[inline]
    pub const fn advanced(self) -> bool {
        matches!(self, Step::Advanced)
    }
}

impl From<Step> for bool {
    fn from(step: Step) -> Self {
        step.advanced()
    }
}

/// A rewindable, position-tagged scanner over an in-memory UTF-8 buffer.
///
/// Single-owner, single-thread per use: all mutating operations take
/// `&mut self`. The buffer itself is immutable after construction and is
/// shared read-only with every [`Token`] the scanner emits.
#[derive(Debug)]
pub struct Scanner {
    buffer: Arc<[u8]>,
    cursor: Pos,
    errors: Vec<EncodingError>,
}

impl Scanner {
    /// Create a scanner over an in-memory string.
    ///
    /// # Panics
    ///
    /// Panics if the source exceeds `u32::MAX` bytes. Use
    /// [`from_bytes`](Self::from_bytes) for fallible construction.
    pub fn new(source: &str) -> Self {
        match Self::from_bytes(source.as_bytes().to_vec()) {
            Ok(scanner) => scanner,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a scanner over raw bytes.
    ///
    /// Arbitrary byte content is accepted; sequences that do not decode as
    /// UTF-8 surface later as [`Step::Malformed`] scan results. Fails only
    /// when the content is too large for `u32` byte offsets.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, SourceError> {
        if u32::try_from(bytes.len()).is_err() {
            return Err(SourceError::TooLarge(bytes.len()));
        }
        let buffer: Arc<[u8]> = bytes.into();
        tracing::debug!(len = buffer.len(), "scanner buffer ready");
        Ok(Scanner {
            buffer,
            cursor: Pos::ZERO,
            errors: Vec::new(),
        })
    }

    /// Create a scanner by reading an input source to completion.
    ///
    /// The read is eager and blocking; after construction the scanner
    /// performs no further I/O. Fails with [`SourceError::MissingInput`]
    /// when no source is supplied and [`SourceError::Io`] when the read
    /// fails mid-stream. No partial scanner is produced on failure.
    pub fn from_reader<R: Read>(reader: Option<R>) -> Result<Self, SourceError> {
        let mut reader = reader.ok_or(SourceError::MissingInput)?;
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(bytes)
    }

    // ─── Scanning ──────────────────────────────────────────────────────

    /// Advance the cursor by one UTF-8 encoded character.
    ///
    /// Returns [`Step::Exhausted`] without mutating anything once the
    /// cursor's `end` offset reaches the buffer length. A byte sequence
    /// that does not decode — or that decodes to the U+FFFD replacement
    /// character itself — records an [`EncodingError`], leaves the cursor
    /// unmoved, and returns [`Step::Malformed`]; the scanner stays usable
    /// for `reset`, `goto`, `peek`, and inspection.
    pub fn scan(&mut self) -> Step {
        let offset = self.cursor.end as usize;
        if offset >= self.buffer.len() {
            return Step::Exhausted;
        }
        match decode_at(&self.buffer, offset) {
            Some((ch, width)) if ch != char::REPLACEMENT_CHARACTER => {
                self.cursor = Pos::new(ch, self.cursor.end, self.cursor.end + width);
                Step::Advanced
            }
            _ => {
                let lead = self.buffer[offset];
                tracing::warn!(
                    offset = self.cursor.end,
                    lead,
                    "invalid UTF-8 sequence; scan halted"
                );
                self.errors.push(EncodingError {
                    offset: self.cursor.end,
                    lead,
                });
                Step::Malformed
            }
        }
    }

    /// Drain the remaining input into a token sequence.
    ///
    /// Scans from wherever the cursor currently sits (no implicit reset),
    /// collecting one token per successful step, and stops at the first
    /// unsuccessful one. The flag is `false` when the error list is
    /// non-empty at that point — i.e. the drain stopped on malformed input
    /// rather than plain exhaustion.
    pub fn scan_all(&mut self) -> (Vec<Token>, bool) {
        let mut tokens = Vec::new();
        while self.scan().advanced() {
            tokens.push(self.token());
        }
        (tokens, !self.errored())
    }

    // ─── Cursor Inspection & Navigation ────────────────────────────────

    /// Materialize the current cursor as a [`Token`].
    ///
    /// Pure read; always reflects the *current* cursor, not a history.
    pub fn token(&self) -> Token {
        Token::new(self.cursor, Arc::clone(&self.buffer))
    }

    /// The current cursor position.
    #[inline]
    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    /// Report whether `lookahead` matches the buffer immediately after the
    /// cursor, without consuming anything.
    ///
    /// True iff the UTF-8 bytes of `lookahead` exactly equal the buffer
    /// contents starting at the cursor's `end` offset; false when that
    /// range would run past the buffer. An empty `lookahead` matches
    /// vacuously as long as the cursor offset is within or at the end of
    /// the buffer.
    pub fn peek(&self, lookahead: &str) -> bool {
        let start = self.cursor.end as usize;
        let Some(end) = start.checked_add(lookahead.len()) else {
            return false;
        };
        self.buffer.get(start..end) == Some(lookahead.as_bytes())
    }

    /// Put the scanner back in its initial state: cursor at [`Pos::ZERO`],
    /// error list cleared. The buffer is untouched.
    pub fn reset(&mut self) {
        self.cursor = Pos::ZERO;
        self.errors.clear();
    }

    /// Move the cursor to the position carried by `token`.
    ///
    /// The assignment is unconditional: no check that the token originated
    /// from this scanner's buffer or that its range is in bounds. Later
    /// operations bounds-check against *this* scanner's buffer, so a token
    /// from another scanner repositions the cursor but reads this buffer's
    /// contents — callers own that trade-off.
    pub fn goto(&mut self, token: &Token) {
        self.cursor = token.pos();
    }

    // ─── Errors & Buffer ───────────────────────────────────────────────

    /// Whether any decode errors have been recorded since construction or
    /// the last [`reset`](Self::reset).
    pub fn errored(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The ordered decode-error records.
    pub fn errors(&self) -> &[EncodingError] {
        &self.errors
    }

    /// The full decoded byte buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Buffer length in bytes.
    pub fn len(&self) -> u32 {
        u32::try_from(self.buffer.len()).unwrap_or(u32::MAX)
    }

    /// Returns `true` if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

/// Decode one UTF-8 character starting at `offset`.
///
/// Returns the character and its byte width, or `None` when the bytes at
/// `offset` are not a well-formed sequence (bad lead byte, truncated tail,
/// invalid continuation, overlong or surrogate encoding).
fn decode_at(buf: &[u8], offset: usize) -> Option<(char, u32)> {
    let lead = *buf.get(offset)?;
    if lead < 0x80 {
        return Some((char::from(lead), 1));
    }
    let width: u32 = match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        // Continuation bytes and 0xF8..=0xFF cannot lead a sequence.
        _ => return None,
    };
    let bytes = buf.get(offset..offset + width as usize)?;
    let decoded = std::str::from_utf8(bytes).ok()?;
    decoded.chars().next().map(|ch| (ch, width))
}
