use thiserror::Error;

/// Rejected construction of a [`ByteRange`](crate::ByteRange) or
/// [`SourceRange`](crate::SourceRange).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("range is reversed: start {start} is past end {end}")]
    Reversed { start: u32, end: u32 },
    #[error("range ends name different files: {start:?} and {end:?}")]
    FileMismatch {
        start: Option<String>,
        end: Option<String>,
    },
}

/// A range bound that does not resolve to a position in the text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliceError {
    #[error("offset {offset} is out of bounds for text of length {len}")]
    OutOfBounds { offset: u32, len: usize },
    #[error("offset {offset} is not on a UTF-8 character boundary")]
    NotCharBoundary { offset: u32 },
    #[error("range is reversed: start {start} is past end {end}")]
    Reversed { start: u32, end: u32 },
    #[error("native index {index} does not map to a byte offset")]
    Unmappable { index: usize },
}
