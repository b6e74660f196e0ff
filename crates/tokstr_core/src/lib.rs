//! Low-level building blocks for tokenized strings.
//!
//! This crate is standalone: it knows nothing about the owning
//! `TokenizedString` container. It provides:
//! - [`Token`]: an `(offset, length)` reference into a backing buffer
//! - [`TokenError`]: construction-time failures for token ranges
//! - [`parse_saturating_u32`]: a total, tolerant base-10 parser
//! - [`match_key`] / [`split_pair`]: `key=value` recognition over raw bytes
//!
//! Everything here operates on borrowed bytes and never allocates.

mod error;
mod pair;
mod parse;
mod token;

pub use error::TokenError;
pub use pair::{match_key, split_pair, KeyMismatch, SEPARATOR};
pub use parse::{parse_saturating_u32, SATURATION_LIMIT};
pub use token::Token;
