//! Token construction errors.

use thiserror::Error;

/// Error when a token cannot reference its backing buffer.
///
/// Only produced while building a token sequence. Lookups over an
/// already-built sequence never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token end lies past the end of the buffer.
    #[error("token {offset}+{length} exceeds buffer of {buffer_len} bytes")]
    OutOfBounds {
        offset: u32,
        length: u32,
        buffer_len: usize,
    },
    /// Token start or end splits a multi-byte UTF-8 character.
    #[error("token {offset}+{length} does not fall on UTF-8 character boundaries")]
    NotCharBoundary { offset: u32, length: u32 },
    /// Range start is greater than range end.
    #[error("token range {start}..{end} is inverted")]
    InvertedRange { start: usize, end: usize },
    /// Token offset exceeds `u32::MAX`.
    #[error("token offset {0} (0x{0:X}) exceeds u32::MAX (0xFFFFFFFF)")]
    OffsetTooLarge(usize),
    /// Token end exceeds `u32::MAX`.
    #[error("token end {0} (0x{0:X}) exceeds u32::MAX (0xFFFFFFFF)")]
    EndTooLarge(usize),
}
