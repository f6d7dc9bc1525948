use crate::PositionEncoding::{Utf8, Utf16, Utf32};
use crate::offsets::{byte_to_native, native_to_byte};

#[test]
fn test_native_to_byte_ascii() {
    let s = "abc";
    for enc in [Utf8, Utf16, Utf32] {
        assert_eq!(native_to_byte(s, 0, enc), Some(0));
        assert_eq!(native_to_byte(s, 2, enc), Some(2));
        assert_eq!(native_to_byte(s, 3, enc), Some(3));
        assert_eq!(native_to_byte(s, 10, enc), None);
    }
}

#[test]
fn test_native_to_byte_chinese() {
    let s = "一二";
    assert_eq!(native_to_byte(s, 0, Utf16), Some(0));
    assert_eq!(native_to_byte(s, 1, Utf16), Some(3));
    assert_eq!(native_to_byte(s, 2, Utf16), Some(6));
    assert_eq!(native_to_byte(s, 3, Utf16), None);
    assert_eq!(native_to_byte(s, 1, Utf8), None);
    assert_eq!(native_to_byte(s, 3, Utf8), Some(3));
}

#[test]
fn test_native_to_byte_emoji() {
    let s = "😀a";
    assert_eq!(native_to_byte(s, 0, Utf16), Some(0));
    // Between the two surrogates.
    assert_eq!(native_to_byte(s, 1, Utf16), None);
    assert_eq!(native_to_byte(s, 2, Utf16), Some(4));
    assert_eq!(native_to_byte(s, 3, Utf16), Some(5));
    assert_eq!(native_to_byte(s, 4, Utf16), None);

    assert_eq!(native_to_byte(s, 1, Utf32), Some(4));
    assert_eq!(native_to_byte(s, 2, Utf32), Some(5));
}

#[test]
fn test_byte_to_native() {
    let s = "héllo";
    assert_eq!(byte_to_native(s, 0, Utf16), Some(0));
    assert_eq!(byte_to_native(s, 1, Utf16), Some(1));
    assert_eq!(byte_to_native(s, 2, Utf16), None);
    assert_eq!(byte_to_native(s, 3, Utf16), Some(2));
    assert_eq!(byte_to_native(s, 6, Utf16), Some(5));
    assert_eq!(byte_to_native(s, 7, Utf16), None);
    assert_eq!(byte_to_native(s, 3, Utf8), Some(3));

    let s = "😀a";
    assert_eq!(byte_to_native(s, 4, Utf16), Some(2));
    assert_eq!(byte_to_native(s, 4, Utf32), Some(1));
    assert_eq!(byte_to_native(s, 2, Utf32), None);
}
