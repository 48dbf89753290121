//! Recursion bounds shared by both grammars.

/// Default maximum nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Limits applied while parsing a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    /// Maximum number of nested rule invocations. Always at least 1.
    pub max_depth: usize,
}

impl ParseLimits {
    /// Creates limits with the given depth, raised to 1 if zero.
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

/// Tracks how deep the current descent is.
#[derive(Debug, Default)]
pub(crate) struct DepthCounter {
    current: usize,
}

impl DepthCounter {
    /// Enters one level. Returns false if that exceeds `limits`.
    pub(crate) fn enter(&mut self, limits: &ParseLimits) -> bool {
        self.current += 1;
        self.current <= limits.max_depth
    }

    pub(crate) fn leave(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub(crate) fn reset(&mut self) {
        self.current = 0;
    }
}
