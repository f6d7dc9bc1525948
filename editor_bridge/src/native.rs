use std::fmt;

use serde::{Deserialize, Serialize};

/// Position in a buffer counted in [`PositionEncoding`](crate::PositionEncoding) units.
///
/// Only meaningful together with the buffer and encoding it was taken from.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NativeIndex(pub usize);

impl From<usize> for NativeIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl fmt::Display for NativeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half-open native range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeRange {
    pub start: NativeIndex,
    pub end: NativeIndex,
}

impl NativeRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: NativeIndex(start),
            end: NativeIndex(end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Cursor position as reported by the editor: 0-based row, column in native units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EditorPosition {
    pub row: usize,
    pub column: usize,
}
