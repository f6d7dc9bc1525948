//! Conversions between editor-native positions and byte-based source positions.
//!
//! Stateless: every call takes the text it maps over and rescans it. Use
//! [`OffsetIndex`](crate::OffsetIndex) when converting many positions over one buffer.

use source_pos::{ByteOffset, ByteRange, SliceError, SourceMap, SourceRange};

use crate::encoding::PositionEncoding;
use crate::native::{EditorPosition, NativeIndex, NativeRange};
use crate::offsets::{byte_to_native, native_to_byte};

pub struct Converter;

impl Converter {
    pub fn native_to_byte(
        source: &str,
        index: NativeIndex,
        encoding: PositionEncoding,
    ) -> Option<ByteOffset> {
        let Some(byte) = native_to_byte(source, index.0, encoding) else {
            tracing::trace!(index = index.0, ?encoding, "native index has no byte offset");
            return None;
        };
        ByteOffset::try_from(byte).ok()
    }

    pub fn byte_to_native(
        source: &str,
        offset: ByteOffset,
        encoding: PositionEncoding,
    ) -> Option<NativeIndex> {
        let Some(units) = byte_to_native(source, offset.as_usize(), encoding) else {
            tracing::trace!(offset = offset.as_u32(), ?encoding, "byte offset has no native index");
            return None;
        };
        Some(NativeIndex(units))
    }

    /// `None` if either bound is unmappable or the range is reversed.
    pub fn native_range_to_byte_range(
        source: &str,
        range: NativeRange,
        encoding: PositionEncoding,
    ) -> Option<ByteRange> {
        let start = Self::native_to_byte(source, range.start, encoding)?;
        let end = Self::native_to_byte(source, range.end, encoding)?;
        ByteRange::new(start, end)
            .inspect_err(|e| tracing::trace!(%e, "native range rejected"))
            .ok()
    }

    pub fn byte_range_to_native_range(
        source: &str,
        range: ByteRange,
        encoding: PositionEncoding,
    ) -> Option<NativeRange> {
        let start = Self::byte_to_native(source, range.start(), encoding)?;
        let end = Self::byte_to_native(source, range.end(), encoding)?;
        Some(NativeRange { start, end })
    }

    pub fn native_range_to_source_range(
        source: &str,
        file: Option<String>,
        range: NativeRange,
        encoding: PositionEncoding,
    ) -> Option<SourceRange> {
        let bytes = Self::native_range_to_byte_range(source, range, encoding)?;
        Some(SourceRange::from_byte_range(file, bytes))
    }

    pub fn source_range_to_native_range(
        source: &str,
        range: &SourceRange,
        encoding: PositionEncoding,
    ) -> Option<NativeRange> {
        Self::byte_range_to_native_range(source, range.byte_range(), encoding)
    }

    /// Text covered by a native range.
    pub fn native_slice<'a>(
        source: &'a str,
        range: NativeRange,
        encoding: PositionEncoding,
    ) -> Result<&'a str, SliceError> {
        let start = Self::native_to_byte(source, range.start, encoding).ok_or(
            SliceError::Unmappable {
                index: range.start.0,
            },
        )?;
        let end = Self::native_to_byte(source, range.end, encoding)
            .ok_or(SliceError::Unmappable { index: range.end.0 })?;
        let bytes = ByteRange::new(start, end).map_err(|_| SliceError::Reversed {
            start: start.as_u32(),
            end: end.as_u32(),
        })?;
        source_pos::slice(source, bytes)
    }

    /// Byte offset of an editor row/column.
    ///
    /// `None` if the row does not exist, or the column runs past the end of the
    /// row or splits a character.
    pub fn editor_position_to_byte(
        source: &str,
        pos: EditorPosition,
        encoding: PositionEncoding,
    ) -> Option<ByteOffset> {
        let sm = SourceMap::new(source);
        let Some((line_start, line_end)) = sm.line_bounds(pos.row) else {
            tracing::trace!(row = pos.row, lines = sm.line_count(), "row out of range");
            return None;
        };
        let line = &source[line_start..line_end];
        let Some(col) = native_to_byte(line, pos.column, encoding) else {
            tracing::trace!(row = pos.row, column = pos.column, "column has no byte offset");
            return None;
        };
        ByteOffset::try_from(line_start + col).ok()
    }

    pub fn byte_to_editor_position(
        source: &str,
        offset: ByteOffset,
        encoding: PositionEncoding,
    ) -> Option<EditorPosition> {
        let byte = offset.as_usize();
        if byte > source.len() || !source.is_char_boundary(byte) {
            tracing::trace!(offset = offset.as_u32(), "byte offset has no editor position");
            return None;
        }
        let sm = SourceMap::new(source);
        let row = sm.line_index(byte);
        let line_start = sm.line_start(row)?;
        let column = byte_to_native(&source[line_start..byte], byte - line_start, encoding)?;
        Some(EditorPosition { row, column })
    }
}
