use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_digits() {
    assert_eq!(parse_saturating_u32(b"0"), 0);
    assert_eq!(parse_saturating_u32(b"800"), 800);
    assert_eq!(parse_saturating_u32(b"007"), 7);
    assert_eq!(parse_saturating_u32(b"2147483646"), 2_147_483_646);
}

#[test]
fn test_parse_empty_and_no_digits() {
    assert_eq!(parse_saturating_u32(b""), 0);
    assert_eq!(parse_saturating_u32(b"abc"), 0);
    assert_eq!(parse_saturating_u32(b"   "), 0);
    assert_eq!(parse_saturating_u32(b"+"), 0);
    assert_eq!(parse_saturating_u32(b"-"), 0);
}

#[test]
fn test_parse_trailing_garbage_ignored() {
    assert_eq!(parse_saturating_u32(b"42ms"), 42);
    assert_eq!(parse_saturating_u32(b"12 34"), 12);
    assert_eq!(parse_saturating_u32(b"9;x=1"), 9);
}

#[test]
fn test_parse_leading_whitespace_and_sign() {
    assert_eq!(parse_saturating_u32(b"  15"), 15);
    assert_eq!(parse_saturating_u32(b"\t\n\x0b\x0c\r15"), 15);
    assert_eq!(parse_saturating_u32(b"+15"), 15);
    // Whitespace after the sign stops the scan.
    assert_eq!(parse_saturating_u32(b"+ 15"), 0);
}

#[test]
fn test_parse_negative() {
    assert_eq!(parse_saturating_u32(b"-5"), SATURATION_LIMIT);
    assert_eq!(parse_saturating_u32(b"-0"), 0);
    assert_eq!(parse_saturating_u32(b"-000"), 0);
}

#[test]
fn test_parse_saturates() {
    assert_eq!(parse_saturating_u32(b"2147483647"), SATURATION_LIMIT);
    assert_eq!(parse_saturating_u32(b"2147483648"), SATURATION_LIMIT);
    assert_eq!(
        parse_saturating_u32(b"99999999999999999999999999"),
        SATURATION_LIMIT
    );
}

#[test]
fn test_saturation_limit_is_signed_max() {
    assert_eq!(i64::from(SATURATION_LIMIT), i64::from(i32::MAX));
}

mod proptest_parse {
    use super::super::{parse_saturating_u32, SATURATION_LIMIT};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_is_total(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let value = parse_saturating_u32(&bytes);
            prop_assert!(value <= SATURATION_LIMIT);
        }

        #[test]
        fn parse_matches_std_below_limit(v in 0u32..SATURATION_LIMIT, suffix in "[^0-9]{0,8}") {
            let input = format!("{v}{suffix}");
            prop_assert_eq!(parse_saturating_u32(input.as_bytes()), v);
        }
    }
}
