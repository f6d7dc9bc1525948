use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RangeError;

/// A count of UTF-8 bytes from the start of a text buffer.
///
/// Serializes as a bare integer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ByteOffset(u32);

impl ByteOffset {
    pub const ZERO: ByteOffset = ByteOffset(0);

    pub const fn new(offset: u32) -> Self {
        Self(offset)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Offset of `text.len()`, or `None` if the buffer is too large to address.
    pub fn end_of(text: &str) -> Option<Self> {
        u32::try_from(text.len()).ok().map(Self)
    }
}

impl From<u32> for ByteOffset {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl TryFrom<usize> for ByteOffset {
    type Error = std::num::TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u32::try_from(value).map(Self)
    }
}

impl fmt::Display for ByteOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A half-open byte range in source text: `[start, end)`.
///
/// `start == end` is an empty range. A range is never reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawByteRange", into = "RawByteRange")]
pub struct ByteRange {
    start: ByteOffset,
    end: ByteOffset,
}

impl ByteRange {
    pub fn new(start: ByteOffset, end: ByteOffset) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Reversed {
                start: start.as_u32(),
                end: end.as_u32(),
            });
        }
        Ok(Self { start, end })
    }

    /// Caller guarantees `start <= end`.
    pub(crate) fn from_sorted(start: ByteOffset, end: ByteOffset) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// `[0, end)`.
    pub fn up_to(end: ByteOffset) -> Self {
        Self {
            start: ByteOffset::ZERO,
            end,
        }
    }

    pub fn empty_at(offset: ByteOffset) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn start(self) -> ByteOffset {
        self.start
    }

    pub fn end(self) -> ByteOffset {
        self.end
    }

    pub fn len(self) -> u32 {
        self.end.as_u32() - self.start.as_u32()
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn contains(self, offset: ByteOffset) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl TryFrom<(u32, u32)> for ByteRange {
    type Error = RangeError;

    fn try_from((start, end): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(start.into(), end.into())
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[derive(Serialize, Deserialize)]
struct RawByteRange {
    start: ByteOffset,
    end: ByteOffset,
}

impl TryFrom<RawByteRange> for ByteRange {
    type Error = RangeError;

    fn try_from(raw: RawByteRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl From<ByteRange> for RawByteRange {
    fn from(range: ByteRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}
