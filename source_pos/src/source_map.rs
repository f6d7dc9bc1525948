use crate::offset::{ByteOffset, ByteRange};

/// 1-based line and byte column of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

/// Line-start index over one text buffer.
///
/// Lines are terminated by `\n`; a trailing `\r` stays part of its line.
pub struct SourceMap<'a> {
    src: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> SourceMap<'a> {
    pub fn new(src: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in src.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        tracing::debug!(bytes = src.len(), lines = line_starts.len(), "indexed lines");
        Self { src, line_starts }
    }

    pub fn source(&self) -> &'a str {
        self.src
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Index of the line holding `byte`, 0-based.
    pub fn line_index(&self, byte: usize) -> usize {
        match self.line_starts.binary_search(&byte) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        }
    }

    /// Byte offset of the first character of line `line` (0-based).
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Byte range of 1-based `line`, excluding its `\n`.
    pub fn line_range(&self, line: usize) -> Option<ByteRange> {
        let idx = line.checked_sub(1)?;
        let (start, end) = self.line_bounds(idx)?;
        let start = ByteOffset::try_from(start).ok()?;
        let end = ByteOffset::try_from(end).ok()?;
        ByteRange::new(start, end).ok()
    }

    /// Start and end (before the `\n`) of the 0-based line `idx`.
    pub fn line_bounds(&self, idx: usize) -> Option<(usize, usize)> {
        let start = *self.line_starts.get(idx)?;
        let end = match self.line_starts.get(idx + 1) {
            Some(next) => next - 1,
            None => self.src.len(),
        };
        Some((start, end))
    }

    /// Returns the 1-based line and column of `offset`, or `None` past the end of text.
    pub fn line_col(&self, offset: ByteOffset) -> Option<LineColumn> {
        let b = offset.as_usize();
        if b > self.src.len() {
            tracing::trace!(offset = b, len = self.src.len(), "offset past end of text");
            return None;
        }
        let line_idx = self.line_index(b);
        let col = b - self.line_starts[line_idx];
        Some(LineColumn {
            line: line_idx + 1,
            column: col + 1,
        })
    }

    /// Inverse of [`SourceMap::line_col`].
    ///
    /// `None` if the line does not exist or the column runs past the line end.
    pub fn offset_of(&self, pos: LineColumn) -> Option<ByteOffset> {
        let idx = pos.line.checked_sub(1)?;
        let col = pos.column.checked_sub(1)?;
        let (start, end) = self.line_bounds(idx)?;
        let b = start.checked_add(col)?;
        if b > end {
            tracing::trace!(line = pos.line, column = pos.column, "column past end of line");
            return None;
        }
        ByteOffset::try_from(b).ok()
    }
}
