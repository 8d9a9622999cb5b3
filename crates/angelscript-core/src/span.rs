//! Source location tracking for diagnostics.
//!
//! Provides [`Span`] to report where an annotation or directive sits in a
//! script section. The script builder works on byte offsets; spans turn those
//! offsets back into the line:column form compilers print.

use std::fmt;

/// A span of source code, represented by its starting position.
///
/// Similar to Rust compiler diagnostics, we track the line:column
/// where a token starts for debugging and error reporting.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed, byte-based).
    pub col: u32,
    /// Length in bytes.
    pub len: u32,
}

impl Span {
    /// Create a new span from a line, column, and length.
    #[inline]
    pub fn new(line: u32, col: u32, len: u32) -> Self {
        Self { line, col, len }
    }

    /// Compute the span covering `len` bytes starting at byte `offset` of `text`.
    ///
    /// Offsets past the end of `text` are clamped to the end.
    pub fn locate(text: &str, offset: usize, len: usize) -> Self {
        let offset = offset.min(text.len());
        let before = &text.as_bytes()[..offset];

        let line = before.iter().filter(|&&b| b == b'\n').count() as u32 + 1;
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |nl| nl + 1);
        let col = (offset - line_start) as u32 + 1;

        Self::new(line, col, len.min(text.len() - offset) as u32)
    }

    /// Whether this span is empty (zero length).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The length of this span in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
