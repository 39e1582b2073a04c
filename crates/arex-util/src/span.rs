//! Span module - Source location tracking.
//!
//! This module provides the [`Span`] type for representing locations in the
//! scanned line, combining byte offsets with line/column information for
//! human-readable diagnostics.

/// Source location span
///
/// A `Span` represents a range in the scanned text, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers (for human-readable output)
///
/// # Examples
///
/// ```
/// use arex_util::span::Span;
///
/// // Create a span with byte offsets and line/column info
/// let span = Span::new(10, 20, 1, 11);
///
/// // Create a point span (single location)
/// let point = Span::point(1, 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use arex_util::span::Span;
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
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    ///
    /// # Examples
    ///
    /// ```
    /// use arex_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 11);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span at a single point
    ///
    /// # Examples
    ///
    /// ```
    /// use arex_util::span::Span;
    ///
    /// let point = Span::point(1, 5);
    /// assert_eq!(point.start, point.end);
    /// ```
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Length of the span in bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use arex_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 11);
    /// assert_eq!(span.len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_span() {
        let span = Span::new(2, 7, 1, 3);
        assert_eq!(span.start, 2);
        assert_eq!(span.end, 7);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 3);
    }

    #[test]
    fn test_point_span() {
        let span = Span::point(1, 5);
        assert_eq!(span.start, span.end);
        assert!(span.is_empty());
    }

    #[test]
    fn test_len() {
        assert_eq!(Span::new(3, 8, 1, 4).len(), 5);
        assert_eq!(Span::DUMMY.len(), 0);
    }

    #[test]
    fn test_dummy() {
        assert!(Span::DUMMY.is_empty());
        assert_eq!(Span::DUMMY.line, 0);
    }
}
