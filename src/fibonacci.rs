use std::iter::FusedIterator;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::{debug, trace};

use crate::options::Options;

/// Position in the Fibonacci sequence as supplied by callers.
///
/// Signed so that negative requests can be rejected explicitly instead of
/// being unrepresentable at the call site.
pub type Index = i64;

/// A Fibonacci number. Arbitrary precision, so no index overflows.
pub type Term = BigUint;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibonacciError {
    #[error("invalid index {0}: Fibonacci indices must be non-negative")]
    InvalidIndex(Index),
    #[error("recursion depth {depth} exceeds the configured limit of {limit}")]
    RecursionLimitExceeded { depth: usize, limit: usize },
}

// Validate a caller-supplied index and turn it into a usable position
pub(crate) fn checked_index(n: Index) -> Result<usize, FibonacciError> {
    usize::try_from(n).map_err(|_| {
        debug!(index = n, "rejected invalid index");
        FibonacciError::InvalidIndex(n)
    })
}

// Reject a request whose recursion would go deeper than the configured limit
pub(crate) fn check_depth(depth: usize, opts: &Options) -> Result<(), FibonacciError> {
    if depth > opts.max_recursion_depth {
        debug!(
            depth,
            limit = opts.max_recursion_depth,
            "rejected request exceeding recursion limit"
        );
        return Err(FibonacciError::RecursionLimitExceeded {
            depth,
            limit: opts.max_recursion_depth,
        });
    }
    Ok(())
}

/// Computes F(n) by iterative accumulation, keeping only the last two terms.
///
/// Runs in O(n) time and O(1) extra space. Every strategy in this crate uses
/// the canonical indexing F(0) = 0, F(1) = 1, F(2) = 1, so `compute_linear(2)`
/// is 1, not 2.
///
/// # Example
/// ```
/// use fibonacci_strategies::compute_linear;
/// use num_bigint::BigUint;
/// assert_eq!(compute_linear(10).unwrap(), BigUint::from(55u32));
/// assert!(compute_linear(-1).is_err());
/// ```
pub fn compute_linear(n: Index) -> Result<Term, FibonacciError> {
    let n = checked_index(n)?;
    let mut last = BigUint::zero();
    let mut current = BigUint::one();

    for _ in 0..n {
        let next = &last + &current;
        last = std::mem::replace(&mut current, next);
    }

    Ok(last)
}

/// Computes F(n) by naive binary recursion with the default [`Options`].
///
/// Exponential time: this is the unmemoized baseline the caches are measured
/// against. Indices above the recursion limit are rejected up front.
pub fn compute_recursive(n: Index) -> Result<Term, FibonacciError> {
    compute_recursive_with(n, &Options::default())
}

/// Same as [`compute_recursive`] with an explicit recursion limit.
pub fn compute_recursive_with(n: Index, opts: &Options) -> Result<Term, FibonacciError> {
    let n = checked_index(n)?;
    check_depth(n, opts)?;
    Ok(recursive(n))
}

fn recursive(n: usize) -> BigUint {
    match n {
        0 => BigUint::zero(),
        1 | 2 => BigUint::one(),
        _ => recursive(n - 1) + recursive(n - 2),
    }
}

/// Naive recursion driven by an explicit work-list instead of the call stack.
///
/// Expands the same binary call tree as [`compute_recursive`] and sums its
/// leaves, so it is just as slow, but it has no depth limit.
pub fn compute_recursive_explicit_stack(n: Index) -> Result<Term, FibonacciError> {
    let n = checked_index(n)?;
    let mut pending = vec![n];
    let mut total = BigUint::zero();

    while let Some(k) = pending.pop() {
        match k {
            0 => {}
            1 | 2 => total += 1u32,
            _ => {
                pending.push(k - 1);
                pending.push(k - 2);
            }
        }
    }

    Ok(total)
}

/// Lazy, infinite Fibonacci sequence starting at F(0).
///
/// Holds only the last two terms; each call to `next` resumes where the
/// previous one stopped. It never ends on its own.
#[derive(Debug, Clone)]
pub struct FibSequence {
    last: BigUint,
    current: BigUint,
}

impl FibSequence {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: BigUint::zero(),
            current: BigUint::one(),
        }
    }
}

impl Default for FibSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibSequence {
    type Item = Term;

    fn next(&mut self) -> Option<Self::Item> {
        let next = &self.last + &self.current;
        let current = std::mem::replace(&mut self.current, next);
        let term = std::mem::replace(&mut self.last, current);
        trace!(term = %term, "sequence produced term");
        Some(term)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for FibSequence {}

/// Returns a fresh, independent Fibonacci sequence.
///
/// # Example
/// ```
/// use fibonacci_strategies::sequence;
/// let first: Vec<String> = sequence().take(8).map(|t| t.to_string()).collect();
/// assert_eq!(first, ["0", "1", "1", "2", "3", "5", "8", "13"]);
/// ```
#[must_use]
pub fn sequence() -> FibSequence {
    FibSequence::new()
}
