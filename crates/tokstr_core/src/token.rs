//! Token references into a backing buffer.
//!
//! A [`Token`] is 8 bytes: a `u32` start offset and a `u32` byte length.
//! It owns no characters. Resolving it against a buffer yields a borrowed
//! slice whose lifetime is tied to that buffer.

use std::fmt;
use std::ops::Range;

use crate::TokenError;

/// `(offset, length)` reference to a contiguous run of bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Start position in the backing buffer, in bytes.
    pub offset: u32,
    /// Number of bytes covered.
    pub length: u32,
}

impl Token {
    /// Create a new token.
    #[inline]
    pub const fn new(offset: u32, length: u32) -> Self {
        Token { offset, length }
    }

    /// Try to create a token from a byte range.
    ///
    /// Fails if the range is inverted or either bound exceeds `u32::MAX`.
    pub fn try_from_range(range: Range<usize>) -> Result<Self, TokenError> {
        if range.start > range.end {
            return Err(TokenError::InvertedRange {
                start: range.start,
                end: range.end,
            });
        }
        let offset =
            u32::try_from(range.start).map_err(|_| TokenError::OffsetTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| TokenError::EndTooLarge(range.end))?;
        Ok(Token {
            offset,
            length: end - offset,
        })
    }

    /// Exclusive end position. Computed in `usize` so it cannot wrap.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset as usize + self.length as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.offset as usize..self.end()
    }

    /// Check whether the token lies entirely within a buffer of `len` bytes.
    #[inline]
    pub fn fits(&self, len: usize) -> bool {
        self.end() <= len
    }

    /// Validate this token against `text`.
    ///
    /// A valid token fits the buffer and starts and ends on character
    /// boundaries, so [`resolve`](Self::resolve) is guaranteed to succeed.
    pub fn check(&self, text: &str) -> Result<(), TokenError> {
        if !self.fits(text.len()) {
            return Err(TokenError::OutOfBounds {
                offset: self.offset,
                length: self.length,
                buffer_len: text.len(),
            });
        }
        if !text.is_char_boundary(self.offset as usize) || !text.is_char_boundary(self.end()) {
            return Err(TokenError::NotCharBoundary {
                offset: self.offset,
                length: self.length,
            });
        }
        Ok(())
    }

    /// The bytes this token designates in `bytes`, or `None` if it does not fit.
    #[inline]
    pub fn resolve_bytes<'a>(&self, bytes: &'a [u8]) -> Option<&'a [u8]> {
        bytes.get(self.to_range())
    }

    /// The substring this token designates in `text`.
    ///
    /// Returns `None` if the token does not fit or splits a character.
    #[inline]
    pub fn resolve<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.to_range())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.offset, self.length)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.offset, self.end())
    }
}

#[cfg(target_pointer_width = "64")]
const _: () = assert!(std::mem::size_of::<Token>() == 8);
