use source_pos::ByteOffset;

use crate::encoding::PositionEncoding;
use crate::native::NativeIndex;

/// A non-ASCII character: where it starts, and how wide it is in each unit.
#[derive(Debug, Clone, Copy)]
struct WideChar {
    byte: usize,
    unit: usize,
    len_utf8: usize,
    len_units: usize,
}

/// Precomputed native ↔ byte mapping for one buffer.
///
/// Built in one pass; lookups binary-search the non-ASCII characters, since
/// runs of ASCII map one byte to one unit in every encoding.
#[derive(Debug, Clone)]
pub struct OffsetIndex {
    encoding: PositionEncoding,
    wide: Vec<WideChar>,
    len_bytes: usize,
    len_units: usize,
}

impl OffsetIndex {
    pub fn new(source: &str, encoding: PositionEncoding) -> Self {
        let mut wide = Vec::new();
        let mut unit = 0usize;
        for (byte, ch) in source.char_indices() {
            let len_units = encoding.len_of(ch);
            if !ch.is_ascii() {
                wide.push(WideChar {
                    byte,
                    unit,
                    len_utf8: ch.len_utf8(),
                    len_units,
                });
            }
            unit += len_units;
        }
        tracing::debug!(
            bytes = source.len(),
            units = unit,
            wide = wide.len(),
            ?encoding,
            "built offset index"
        );
        Self {
            encoding,
            wide,
            len_bytes: source.len(),
            len_units: unit,
        }
    }

    pub fn encoding(&self) -> PositionEncoding {
        self.encoding
    }

    /// Length of the indexed text in native units.
    pub fn native_len(&self) -> NativeIndex {
        NativeIndex(self.len_units)
    }

    pub fn to_byte(&self, index: NativeIndex) -> Option<ByteOffset> {
        let units = index.0;
        if units > self.len_units {
            return None;
        }
        let idx = self.wide.partition_point(|w| w.unit <= units);
        let byte = match idx.checked_sub(1).map(|i| self.wide[i]) {
            None => units,
            Some(w) if units < w.unit + w.len_units => {
                if units != w.unit {
                    tracing::trace!(index = units, "native index splits a character");
                    return None;
                }
                w.byte
            }
            Some(w) => w.byte + w.len_utf8 + (units - w.unit - w.len_units),
        };
        ByteOffset::try_from(byte).ok()
    }

    pub fn to_native(&self, offset: ByteOffset) -> Option<NativeIndex> {
        let byte = offset.as_usize();
        if byte > self.len_bytes {
            return None;
        }
        let idx = self.wide.partition_point(|w| w.byte <= byte);
        let units = match idx.checked_sub(1).map(|i| self.wide[i]) {
            None => byte,
            Some(w) if byte < w.byte + w.len_utf8 => {
                if byte != w.byte {
                    tracing::trace!(offset = byte, "byte offset splits a character");
                    return None;
                }
                w.unit
            }
            Some(w) => w.unit + w.len_units + (byte - w.byte - w.len_utf8),
        };
        Some(NativeIndex(units))
    }
}
