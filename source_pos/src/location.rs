use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::offset::{ByteOffset, ByteRange};

/// A byte position in a (possibly unnamed) source file.
///
/// Locations order by file name first, then by offset. A missing file name
/// compares as the empty string, and sorts before an explicit `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub offset: ByteOffset,
}

impl SourceLocation {
    pub fn new(file: Option<String>, offset: ByteOffset) -> Self {
        Self { file, offset }
    }

    pub fn in_file(file: impl Into<String>, offset: impl Into<ByteOffset>) -> Self {
        Self {
            file: Some(file.into()),
            offset: offset.into(),
        }
    }

    pub fn unnamed(offset: impl Into<ByteOffset>) -> Self {
        Self {
            file: None,
            offset: offset.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        self.file.as_deref().unwrap_or("")
    }
}

impl Ord for SourceLocation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.file_name()
            .cmp(other.file_name())
            .then_with(|| self.file.is_some().cmp(&other.file.is_some()))
            .then_with(|| self.offset.cmp(&other.offset))
    }
}

impl PartialOrd for SourceLocation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{file}@{}", self.offset),
            None => write!(f, "<unknown>@{}", self.offset),
        }
    }
}

/// A span between two locations in the same file, `start <= end`.
///
/// Ordered by `start`, then by `end`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSourceRange", into = "RawSourceRange")]
pub struct SourceRange {
    start: SourceLocation,
    end: SourceLocation,
}

impl SourceRange {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Result<Self, RangeError> {
        if start.file != end.file {
            return Err(RangeError::FileMismatch {
                start: start.file,
                end: end.file,
            });
        }
        if start.offset > end.offset {
            return Err(RangeError::Reversed {
                start: start.offset.as_u32(),
                end: end.offset.as_u32(),
            });
        }
        Ok(Self { start, end })
    }

    /// Attaches a file name to a byte range.
    pub fn from_byte_range(file: Option<String>, range: ByteRange) -> Self {
        Self {
            start: SourceLocation::new(file.clone(), range.start()),
            end: SourceLocation::new(file, range.end()),
        }
    }

    pub fn start(&self) -> &SourceLocation {
        &self.start
    }

    pub fn end(&self) -> &SourceLocation {
        &self.end
    }

    pub fn file(&self) -> Option<&str> {
        self.start.file.as_deref()
    }

    pub fn byte_range(&self) -> ByteRange {
        ByteRange::from_sorted(self.start.offset, self.end.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    pub fn contains(&self, location: &SourceLocation) -> bool {
        location.file == self.start.file && self.byte_range().contains(location.offset)
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}",
            self.file().unwrap_or("<unknown>"),
            self.byte_range()
        )
    }
}

#[derive(Serialize, Deserialize)]
struct RawSourceRange {
    start: SourceLocation,
    end: SourceLocation,
}

impl TryFrom<RawSourceRange> for SourceRange {
    type Error = RangeError;

    fn try_from(raw: RawSourceRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl From<SourceRange> for RawSourceRange {
    fn from(range: SourceRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}
