//! Error types for scanner construction and scanning.
//!
//! Construction failures ([`SourceError`]) are returned synchronously; no
//! partial scanner is ever produced. Decode failures ([`EncodingError`]) are
//! accumulated on the scanner instead of raised, so callers can drain
//! everything scannable and inspect the records afterwards.

use thiserror::Error;

/// Failure to construct a scanner from an input source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No input source was supplied.
    #[error("no input source was provided")]
    MissingInput,

    /// Reading the source to completion failed.
    #[error("failed to read input source: {0}")]
    Io(#[from] std::io::Error),

    /// The source exceeds the `u32` byte-offset range of [`Pos`](crate::Pos).
    #[error("source is {0} bytes; byte offsets are limited to the u32 range")]
    TooLarge(usize),
}

/// A byte sequence that does not decode to a valid character.
///
/// Recorded on the scanner when a scan step encounters malformed UTF-8 (or
/// an encoded U+FFFD replacement character, which the scanner treats the
/// same way). Non-fatal: the scanner remains usable for `reset`, `goto`,
/// `peek`, and buffer inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("invalid UTF-8 sequence at byte {offset} (lead byte 0x{lead:02X})")]
pub struct EncodingError {
    /// Byte offset where decoding failed.
    pub offset: u32,
    /// The lead byte at that offset.
    pub lead: u8,
}
