//! Materialized cursor snapshots.
//!
//! A [`Token`] pairs a [`Pos`] with a shared, read-only handle on the buffer
//! it was read from. The buffer is never resized or mutated after scanner
//! construction, so a token's byte range stays dereferenceable for as long
//! as the token lives — even after the cursor has moved elsewhere or the
//! scanner itself has been dropped.

use std::fmt;
use std::sync::Arc;

use crate::pos::Pos;

/// An immutable snapshot of the cursor: a position plus a read-only alias
/// of the buffer it came from.
///
/// Tokens are cheap to clone (one `Arc` bump) and may outlive the scanner
/// that produced them. Feeding a token back into
/// [`Scanner::goto`](crate::Scanner::goto) rewinds the cursor to the
/// token's position.
#[derive(Clone)]
pub struct Token {
    pos: Pos,
    buffer: Arc<[u8]>,
}

impl Token {
    /// Snapshot a position against a shared buffer handle.
    pub(crate) fn new(pos: Pos, buffer: Arc<[u8]>) -> Self {
        Token { pos, buffer }
    }

    /// The recorded position.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// The raw bytes of the token's range in the aliased buffer.
    ///
    /// Empty when the range falls outside the buffer (possible only for
    /// positions carried across scanners).
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.get(self.pos.to_range()).unwrap_or(&[])
    }

    /// The token's byte range decoded as UTF-8.
    ///
    /// `None` when the range is out of bounds or does not hold valid UTF-8;
    /// both are impossible for tokens read from their own buffer.
    pub fn lexeme(&self) -> Option<&str> {
        let bytes = self.buffer.get(self.pos.to_range())?;
        std::str::from_utf8(bytes).ok()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pos.fmt(f)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("pos", &self.pos)
            .field("buffer_len", &self.buffer.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
