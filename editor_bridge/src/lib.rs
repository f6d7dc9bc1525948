//! Editor-side position mapping.
//!
//! The embedded editor addresses text in native units (UTF-16 code units by
//! default) while syntax tooling uses UTF-8 byte offsets from `source_pos`.
//! Ranges are half-open `[start, end)` in both worlds.
mod converter;
mod encoding;
mod index;
mod native;
mod tests;

pub mod offsets;

pub use converter::Converter;
pub use encoding::PositionEncoding;
pub use index::OffsetIndex;
pub use native::{EditorPosition, NativeIndex, NativeRange};
