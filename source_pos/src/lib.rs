//! Byte-based source positions.
//!
//! All offsets are UTF-8 byte counts from the start of a buffer, and ranges are
//! half-open `[start, end)`. Conversion to editor-native indices (UTF-16 etc.)
//! lives in `editor_bridge`.
mod error;
mod location;
mod offset;
mod source_map;
mod tests;

pub mod slice;

pub use error::{RangeError, SliceError};
pub use location::{SourceLocation, SourceRange};
pub use offset::{ByteOffset, ByteRange};
pub use slice::{slice, slice_source_range, slice_up_to};
pub use source_map::{LineColumn, SourceMap};
