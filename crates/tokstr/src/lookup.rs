//! Token comparison and keyed value lookup.
//!
//! Every lookup here is total. An out-of-range index, a key mismatch, or
//! an out-of-range value all collapse into `false` / `None`; the cause is
//! only visible through `trace`-level events.

use tokstr_core::{match_key, parse_saturating_u32, split_pair, SATURATION_LIMIT};
use tracing::trace;

use crate::TokenizedString;

impl TokenizedString {
    /// Compare token `index` of `self` with token `other_index` of `other`.
    ///
    /// Byte-exact: equal length and identical bytes. No case folding or
    /// trimming. Returns `false` if either index is out of range. `other`
    /// may be `self`.
    pub fn equals(&self, index: usize, other: &TokenizedString, other_index: usize) -> bool {
        match (self.get_bytes(index), other.get_bytes(other_index)) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => false,
        }
    }

    /// Compare token `index` with a literal, byte-exact.
    pub fn equals_str(&self, index: usize, s: &str) -> bool {
        self.get_bytes(index).is_some_and(|bytes| bytes == s.as_bytes())
    }

    /// Check whether token `index` begins with `prefix`, byte-exact.
    pub fn starts_with(&self, index: usize, prefix: &str) -> bool {
        self.get_bytes(index)
            .is_some_and(|bytes| bytes.starts_with(prefix.as_bytes()))
    }

    /// Read the unsigned value of a `key=value` token.
    ///
    /// Token `index` must be strictly longer than `key.len() + 1`, begin
    /// with `key`, and have `=` right after it. The remaining bytes are read
    /// with [`parse_saturating_u32`], so trailing garbage is ignored.
    ///
    /// Only values strictly below `i32::MAX` are accepted, giving a range of
    /// `0..=2_147_483_646`. The bound is the signed maximum on purpose;
    /// it is also the parser's saturation sentinel.
    pub fn get_u32(&self, index: usize, key: &str) -> Option<u32> {
        let Some(bytes) = self.get_bytes(index) else {
            trace!(index, len = self.len(), "keyed lookup: index out of range");
            return None;
        };
        let digits = match match_key(bytes, key.as_bytes()) {
            Ok(digits) => digits,
            Err(cause) => {
                trace!(index, key, ?cause, "keyed lookup: key mismatch");
                return None;
            }
        };
        let value = parse_saturating_u32(digits);
        if value < SATURATION_LIMIT {
            Some(value)
        } else {
            trace!(index, key, value, "keyed lookup: value out of range");
            None
        }
    }

    /// Out-parameter form of [`get_u32`](Self::get_u32).
    ///
    /// Writes `value` and returns `true` on success. On failure returns
    /// `false` and leaves `value` untouched.
    pub fn get_u32_into(&self, index: usize, key: &str, value: &mut u32) -> bool {
        match self.get_u32(index, key) {
            Some(v) => {
                *value = v;
                true
            }
            None => false,
        }
    }

    /// Split token `index` at its first `=` into `(name, value)`.
    ///
    /// Returns `None` if the index is out of range or there is no `=`.
    pub fn name_value_pair(&self, index: usize) -> Option<(&str, &str)> {
        let text = self.get(index)?;
        let (name, _) = split_pair(text.as_bytes())?;
        // `=` is ASCII, so both halves lie on character boundaries.
        Some((&text[..name.len()], &text[name.len() + 1..]))
    }

    /// Join the texts of tokens `start..` with `delimiter`.
    ///
    /// Returns an empty string if `start` is out of range.
    pub fn cat(&self, delimiter: &str, start: usize) -> String {
        let mut out = String::new();
        for (i, text) in self.iter().skip(start).enumerate() {
            if i > 0 {
                out.push_str(delimiter);
            }
            out.push_str(text);
        }
        out
    }
}
