//! Tolerant Integer Parsing
//!
//! [`parse_saturating_u32`] never fails. It reads what digits it can and
//! ignores the rest, the way C's `atoi` family treats its input, but with
//! a defined ceiling instead of undefined overflow.
//!
//! # Saturation
//!
//! Accumulation stops at [`SATURATION_LIMIT`] (`i32::MAX`). Returning the
//! limit doubles as an overflow sentinel: keyed lookups accept only values
//! strictly below it, so any input that saturated is rejected there.

/// Ceiling for [`parse_saturating_u32`], equal to `i32::MAX`.
///
/// Kept at the signed maximum rather than `u32::MAX` for compatibility
/// with existing `key=value` consumers.
pub const SATURATION_LIMIT: u32 = i32::MAX.unsigned_abs();

/// Whitespace as classified by C `isspace` in the "C" locale.
#[inline]
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Parse leading base-10 digits from `bytes`, saturating at [`SATURATION_LIMIT`].
///
/// 1. Leading whitespace is skipped.
/// 2. One optional `+` or `-` sign is consumed.
/// 3. Digits accumulate until the first non-digit or the end of input.
///
/// Empty input, input with no digits, or a bare sign yields `0`. A negative
/// sign with a non-zero magnitude has no unsigned representation and yields
/// [`SATURATION_LIMIT`]; `-0` yields `0`.
pub fn parse_saturating_u32(bytes: &[u8]) -> u32 {
    let start = bytes
        .iter()
        .position(|&b| !is_c_space(b))
        .unwrap_or(bytes.len());
    let mut rest = &bytes[start..];

    let negative = match rest.split_first() {
        Some((b'-', tail)) => {
            rest = tail;
            true
        }
        Some((b'+', tail)) => {
            rest = tail;
            false
        }
        _ => false,
    };

    let limit = u64::from(SATURATION_LIMIT);
    let mut value: u64 = 0;
    for &b in rest.iter().take_while(|b| b.is_ascii_digit()) {
        value = value * 10 + u64::from(b - b'0');
        if value >= limit {
            return SATURATION_LIMIT;
        }
    }

    if negative && value != 0 {
        return SATURATION_LIMIT;
    }
    u32::try_from(value).unwrap_or(SATURATION_LIMIT)
}

#[cfg(test)]
mod tests;
