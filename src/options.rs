/// Default call depth allowed for the recursive strategies.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 2048;

/// Tuning knobs for the recursive strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Deepest recursion a single call may need before it is rejected with
    /// `FibonacciError::RecursionLimitExceeded`.
    pub max_recursion_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
        }
    }
}

impl Options {
    #[must_use]
    pub fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }
}
