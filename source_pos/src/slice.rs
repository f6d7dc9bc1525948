//! Substring extraction by byte coordinates.
//!
//! Every bound must land on a UTF-8 character boundary inside the text.
//! Nothing is clamped.

use crate::error::SliceError;
use crate::location::SourceRange;
use crate::offset::{ByteOffset, ByteRange};

/// Checks that `offset` is a valid slice boundary of `text`.
pub fn check_boundary(text: &str, offset: ByteOffset) -> Result<usize, SliceError> {
    let b = offset.as_usize();
    if b > text.len() {
        return Err(SliceError::OutOfBounds {
            offset: offset.as_u32(),
            len: text.len(),
        });
    }
    if !text.is_char_boundary(b) {
        return Err(SliceError::NotCharBoundary {
            offset: offset.as_u32(),
        });
    }
    Ok(b)
}

pub fn slice(text: &str, range: ByteRange) -> Result<&str, SliceError> {
    let start = check_boundary(text, range.start())?;
    let end = check_boundary(text, range.end())?;
    Ok(&text[start..end])
}

pub fn slice_source_range<'a>(text: &'a str, range: &SourceRange) -> Result<&'a str, SliceError> {
    slice(text, range.byte_range())
}

/// Text before `end`: `text[..end]`.
pub fn slice_up_to(text: &str, end: ByteOffset) -> Result<&str, SliceError> {
    slice(text, ByteRange::up_to(end))
}
