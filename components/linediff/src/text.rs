//! Line stores - immutable, line-indexed views of a document.
//!
//! A [`LineStore`] owns the document text together with the byte span of every
//! line. Lines never include their terminating `\n`. Ranges into a store are
//! half-open [`LineRange`]s.

use serde::Serialize;
use std::ops::Range;

use crate::error::ComparisonError;

/// Half-open range of line indices, `start..end`.
///
/// `start == end` denotes an empty interval positioned before line `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::InvalidRange`] if `start > end`.
    pub const fn new(start: usize, end: usize) -> Result<Self, ComparisonError> {
        if start > end {
            return Err(ComparisonError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates an empty range positioned before line `at`.
    #[must_use]
    pub const fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub(crate) const fn from_bounds(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// First line of the range (inclusive).
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// End of the range (exclusive).
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of lines covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers no lines.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The range as a standard library range, for slicing.
    #[must_use]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Checks that the range fits inside a store of `line_count` lines.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::OutOfBounds`] if `end > line_count`.
    pub const fn check_bounds(&self, line_count: usize) -> Result<(), ComparisonError> {
        if self.end > line_count {
            return Err(ComparisonError::OutOfBounds {
                start: self.start,
                end: self.end,
                line_count,
            });
        }
        Ok(())
    }
}

/// Byte offsets of one line inside the store text, excluding the newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// Offset of the first byte of the line.
    pub start: usize,
    /// Offset one past the last byte of the line.
    pub end: usize,
}

/// Immutable document text indexed by line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineStore {
    text: String,
    spans: Vec<LineSpan>,
}

impl LineStore {
    /// Splits `text` on `\n`.
    ///
    /// A text with `k` newlines has `k + 1` lines: `""` is a single empty line
    /// and `"x\n"` is `["x", ""]`.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut spans = Vec::new();
        let mut start = 0;
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                spans.push(LineSpan { start, end: offset });
                start = offset + 1;
            }
        }
        spans.push(LineSpan {
            start,
            end: text.len(),
        });
        Self { text, spans }
    }

    /// Builds a store from individual lines, which must not contain `\n`.
    ///
    /// Unlike [`LineStore::from_text`] this can produce a store with no lines.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        let mut spans = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            if index > 0 {
                text.push('\n');
            }
            let start = text.len();
            text.push_str(line.as_ref());
            spans.push(LineSpan {
                start,
                end: text.len(),
            });
        }
        Self { text, spans }
    }

    /// Number of lines in the store.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.spans.len()
    }

    /// Whether the store holds no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The full document text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Span of line `index`, if it exists.
    #[must_use]
    pub fn span(&self, index: usize) -> Option<LineSpan> {
        self.spans.get(index).copied()
    }

    /// Content of line `index`, if it exists.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.spans
            .get(index)
            .map(|span| &self.text[span.start..span.end])
    }

    /// Iterates over all lines in order.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.spans
            .iter()
            .map(|span| &self.text[span.start..span.end])
    }

    /// Lines covered by `range`.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::OutOfBounds`] if the range exceeds the store.
    pub fn slice(&self, range: LineRange) -> Result<Vec<&str>, ComparisonError> {
        range.check_bounds(self.line_count())?;
        Ok(self.spans[range.as_range()]
            .iter()
            .map(|span| &self.text[span.start..span.end])
            .collect())
    }

    /// Text covered by `range`, without the trailing newline.
    ///
    /// An empty range has no content at all (`None`), which is distinct from
    /// a range over a single empty line (`Some("")`).
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::OutOfBounds`] if the range exceeds the store.
    pub fn range_content(&self, range: LineRange) -> Result<Option<&str>, ComparisonError> {
        range.check_bounds(self.line_count())?;
        if range.is_empty() {
            return Ok(None);
        }
        let first = self.spans[range.start()];
        let last = self.spans[range.end() - 1];
        Ok(Some(&self.text[first.start..last.end]))
    }
}
