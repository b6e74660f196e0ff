//! The `TokenizedString` container: construction and positional access.
//!
//! # Invariant
//!
//! Every stored token fits the buffer and starts and ends on UTF-8
//! character boundaries. All insertion paths validate this, so lookups can
//! resolve tokens without re-checking and never panic.

use std::iter::FusedIterator;
use std::slice;

use tokstr_core::{Token, TokenError};
use tracing::debug;

/// A backing buffer plus an ordered sequence of token references into it.
///
/// Tokens are append-only: once pushed they are never removed or changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "TokenizedParts")
)]
pub struct TokenizedString {
    text: String,
    tokens: Vec<Token>,
}

/// Unvalidated wire form, checked on deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TokenizedParts {
    text: String,
    tokens: Vec<Token>,
}

#[cfg(feature = "serde")]
impl TryFrom<TokenizedParts> for TokenizedString {
    type Error = TokenError;

    fn try_from(parts: TokenizedParts) -> Result<Self, Self::Error> {
        TokenizedString::from_parts(parts.text, parts.tokens)
    }
}

impl TokenizedString {
    /// Create an empty tokenized string.
    #[inline]
    pub fn new() -> Self {
        TokenizedString {
            text: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Create an empty tokenized string with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(text_capacity: usize, token_capacity: usize) -> Self {
        TokenizedString {
            text: String::with_capacity(text_capacity),
            tokens: Vec::with_capacity(token_capacity),
        }
    }

    /// Build from a buffer and the tokens that reference it.
    ///
    /// Fails on the first token that does not fit `text` or splits a
    /// character.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn from_parts(
        text: impl Into<String>,
        tokens: impl IntoIterator<Item = Token>,
    ) -> Result<Self, TokenError> {
        let text = text.into();
        let tokens = tokens.into_iter();
        let mut checked = Vec::with_capacity(tokens.size_hint().0);
        for (index, token) in tokens.enumerate() {
            if let Err(err) = token.check(&text) {
                debug!(index, %err, "rejected token");
                return Err(err);
            }
            checked.push(token);
        }
        Ok(TokenizedString {
            text,
            tokens: checked,
        })
    }

    /// Append a token referencing the existing buffer.
    pub fn push_token(&mut self, token: Token) -> Result<(), TokenError> {
        if let Err(err) = token.check(&self.text) {
            debug!(index = self.tokens.len(), %err, "rejected token");
            return Err(err);
        }
        self.tokens.push(token);
        Ok(())
    }

    /// Append `s` to the buffer and record a token covering it.
    ///
    /// Fails without modifying `self` if the grown buffer would exceed
    /// `u32::MAX` bytes.
    pub fn push_back(&mut self, s: &str) -> Result<(), TokenError> {
        let start = self.text.len();
        let token = Token::try_from_range(start..start + s.len())?;
        self.text.push_str(s);
        self.tokens.push(token);
        Ok(())
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The whole backing buffer.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All tokens in insertion order.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The token at `index`, if in range.
    #[inline]
    pub fn token(&self, index: usize) -> Option<Token> {
        self.tokens.get(index).copied()
    }

    /// The text of the token at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index)?.resolve(&self.text)
    }

    /// The bytes of the token at `index`, if in range.
    #[inline]
    pub(crate) fn get_bytes(&self, index: usize) -> Option<&[u8]> {
        self.tokens.get(index)?.resolve_bytes(self.text.as_bytes())
    }

    /// Iterate over token texts in order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            text: &self.text,
            tokens: self.tokens.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a TokenizedString {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the token texts of a [`TokenizedString`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    text: &'a str,
    tokens: slice::Iter<'a, Token>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        // Stored tokens always resolve.
        self.tokens.next().map(|t| t.resolve(self.text).unwrap_or(""))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tokens
            .next_back()
            .map(|t| t.resolve(self.text).unwrap_or(""))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
