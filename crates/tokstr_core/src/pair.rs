//! `key=value` recognition over raw token bytes.

/// Separator between a key and its value.
pub const SEPARATOR: u8 = b'=';

/// Why a token did not match a key.
///
/// Only used for tracing; callers of keyed lookups see a plain `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyMismatch {
    /// Token has no room for `key`, the separator, and one value byte.
    TooShort,
    /// Token does not start with `key`.
    Prefix,
    /// The byte after `key` is not [`SEPARATOR`].
    MissingSeparator,
}

/// Match `token` against `key` and return the value bytes after `key=`.
///
/// The token must be strictly longer than `key.len() + 1`, start with
/// `key`, and have [`SEPARATOR`] immediately after it. The returned value
/// is therefore never empty.
#[inline]
pub fn match_key<'a>(token: &'a [u8], key: &[u8]) -> Result<&'a [u8], KeyMismatch> {
    let offset = key.len() + 1;
    if token.len() <= offset {
        return Err(KeyMismatch::TooShort);
    }
    if !token.starts_with(key) {
        return Err(KeyMismatch::Prefix);
    }
    if token[key.len()] != SEPARATOR {
        return Err(KeyMismatch::MissingSeparator);
    }
    Ok(&token[offset..])
}

/// Split `token` at its first [`SEPARATOR`] into `(name, value)`.
///
/// Either side may be empty. Returns `None` if there is no separator.
#[inline]
pub fn split_pair(token: &[u8]) -> Option<(&[u8], &[u8])> {
    let pos = memchr::memchr(SEPARATOR, token)?;
    Some((&token[..pos], &token[pos + 1..]))
}

#[cfg(test)]
mod tests;
