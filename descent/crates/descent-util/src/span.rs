//! Span module - Source location tracking.
//!
//! # Examples
//!
//! ```
//! use descent_util::span::Span;
//!
//! // "foo" starting at the first column of line 1
//! let span = Span::new(0, 3, 1, 1);
//! assert_eq!(span.end - span.start, 3);
//! assert_eq!(span.to_string(), "1:1");
//! ```

use std::fmt;

/// Source location span
///
/// A `Span` represents a range in one input line, identified by:
/// - Byte offsets (start, end) into the scanned source
/// - Line and column numbers (for human-readable output)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, reset at every line terminator)
    pub column: u32,
}

impl Span {
    /// A span with no location, for values that did not come from source
    ///
    /// # Examples
    ///
    /// ```
    /// use descent_util::span::Span;
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
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
