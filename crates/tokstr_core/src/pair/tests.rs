use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_match_key() {
    assert_eq!(match_key(b"timeout=30", b"timeout"), Ok(&b"30"[..]));
    assert_eq!(match_key(b"k=1", b"k"), Ok(&b"1"[..]));
    assert_eq!(match_key(b"k==1", b"k"), Ok(&b"=1"[..]));
}

#[test]
fn test_match_key_too_short() {
    // Key and separator present but no value byte.
    assert_eq!(match_key(b"timeout=", b"timeout"), Err(KeyMismatch::TooShort));
    assert_eq!(match_key(b"timeout", b"timeout"), Err(KeyMismatch::TooShort));
    assert_eq!(match_key(b"", b"k"), Err(KeyMismatch::TooShort));
}

#[test]
fn test_match_key_prefix() {
    assert_eq!(match_key(b"other=5", b"timeout"), Err(KeyMismatch::TooShort));
    assert_eq!(match_key(b"other=55", b"width"), Err(KeyMismatch::Prefix));
    // Case-sensitive.
    assert_eq!(match_key(b"Width=800", b"width"), Err(KeyMismatch::Prefix));
}

#[test]
fn test_match_key_missing_separator() {
    assert_eq!(
        match_key(b"timeout5", b"timeout"),
        Err(KeyMismatch::TooShort)
    );
    assert_eq!(
        match_key(b"timeout55", b"timeout"),
        Err(KeyMismatch::MissingSeparator)
    );
    // A longer key sharing the prefix is not a match.
    assert_eq!(
        match_key(b"timeouts=5", b"timeout"),
        Err(KeyMismatch::MissingSeparator)
    );
}

#[test]
fn test_match_key_empty_key() {
    assert_eq!(match_key(b"=7", b""), Ok(&b"7"[..]));
    assert_eq!(match_key(b"a=7", b""), Err(KeyMismatch::MissingSeparator));
}

#[test]
fn test_split_pair() {
    assert_eq!(split_pair(b"name=value"), Some((&b"name"[..], &b"value"[..])));
    assert_eq!(split_pair(b"a=b=c"), Some((&b"a"[..], &b"b=c"[..])));
    assert_eq!(split_pair(b"=x"), Some((&b""[..], &b"x"[..])));
    assert_eq!(split_pair(b"x="), Some((&b"x"[..], &b""[..])));
    assert_eq!(split_pair(b"novalue"), None);
    assert_eq!(split_pair(b""), None);
}
