//! Span module - Source location tracking.
//!
//! Offsets in a [`Span`] count decoded code points, not bytes: the lexer
//! works on a fixed-width code-point buffer, so every position it reports
//! is an index into that buffer. Lines are 1-based, columns are 0-based.
//!
//! # Examples
//!
//! ```
//! use covc_util::span::Span;
//!
//! // `x` in "let x" sits at offset 4, line 1, column 4
//! let span = Span::new(4, 5, 1, 4);
//! assert_eq!(span.len(), 1);
//! ```

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Code-point offsets (start inclusive, end exclusive)
/// - Line and column of the first code point (for human-readable output)
///
/// # Examples
///
/// ```
/// use covc_util::span::Span;
///
/// let span = Span::new(10, 20, 2, 5);
/// assert_eq!(span.start, 10);
/// assert_eq!(span.column, 5);
/// assert!(!span.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start code-point offset in source
    pub start: usize,
    /// End code-point offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (0-based, in code points)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use covc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start code-point offset
    /// * `end` - End code-point offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (0-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        debug_assert!(start <= end, "span start ({start}) must be <= end ({end})");
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in code points
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Column one past the last code point, assuming the span does not
    /// cross a line break.
    ///
    /// # Examples
    ///
    /// ```
    /// use covc_util::span::Span;
    ///
    /// let span = Span::new(10, 13, 2, 4);
    /// assert_eq!(span.end_column(), 7);
    /// ```
    #[inline]
    pub fn end_column(&self) -> u32 {
        self.column + self.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new_and_len() {
        let span = Span::new(5, 10, 1, 5);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert_eq!(span.end_column(), 10);
    }
}
