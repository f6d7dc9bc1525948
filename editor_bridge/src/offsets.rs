//! Exact native-unit ↔ byte offset mapping by scanning the text.
//!
//! A position that falls inside one character's encoding, or past the end of
//! the text, has no mapping.

use crate::encoding::PositionEncoding;

/// Byte offset of the native position `units`.
pub fn native_to_byte(source: &str, units: usize, encoding: PositionEncoding) -> Option<usize> {
    if encoding == PositionEncoding::Utf8 {
        return (units <= source.len() && source.is_char_boundary(units)).then_some(units);
    }

    let mut count = 0usize;
    for (byte_idx, ch) in source.char_indices() {
        if count == units {
            return Some(byte_idx);
        }
        if count > units {
            return None;
        }
        count += encoding.len_of(ch);
    }

    (count == units).then_some(source.len())
}

/// Native position of byte offset `byte`.
pub fn byte_to_native(source: &str, byte: usize, encoding: PositionEncoding) -> Option<usize> {
    if byte > source.len() || !source.is_char_boundary(byte) {
        return None;
    }
    Some(encoding.len_of_str(&source[..byte]))
}
