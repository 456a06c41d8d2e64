//! # Fibonacci Strategies Library
//!
//! This library computes Fibonacci numbers with several alternative strategies so their cost can
//! be compared side by side: plain iteration, a lazy generator, naive recursion, and two
//! memoizing caches. All terms are arbitrary-precision `BigUint` values, so no index overflows.
//!
//! ## Indexing
//! Every strategy uses the canonical convention F(0) = 0, F(1) = 1, F(2) = 1 and
//! F(n) = F(n-1) + F(n-2). Indices are signed at the API surface; negative indices are rejected
//! with [`FibonacciError::InvalidIndex`].
//!
//! ## Overview of Functions
//!
//! ### Errors
//! - `FibonacciError`: an invalid (negative) index, or a request whose recursion would exceed the
//!   configured depth limit.
//!
//! ### Stateless Computation
//!
//! #### `compute_linear`
//! Iterates from the base pair, keeping only the last two terms. O(n) time, O(1) extra space.
//!
//! #### `compute_recursive`
//! Naive binary recursion with no memoization. Exponential time; kept as the baseline that shows
//! what the caches save. `compute_recursive_with` takes explicit [`Options`], and
//! `compute_recursive_explicit_stack` walks the same call tree without using the call stack.
//!
//! #### `sequence`
//! Returns a fresh, infinite [`FibSequence`] iterator starting at F(0).
//!
//! ### Memoizing Caches
//!
//! #### `CacheByIndex`
//! Pulls terms from its own `FibSequence` into an append-only list; any index already covered is
//! an O(1) lookup.
//!
//! #### `CacheByMap`
//! Keeps terms in a map seeded with F(0) and F(1) and fills missing entries by recursing on their
//! two predecessors, computing each index at most once. `get_iterative` resolves the same
//! dependencies with an explicit work-list.
//!
//! Both caches take `&mut self`, so a shared instance needs external synchronization.
//!
//! ## Usage Example
//! ```rust
//! use fibonacci_strategies::{compute_linear, CacheByMap};
//! use num_bigint::BigUint;
//! let mut cache = CacheByMap::new();
//! assert_eq!(cache.get(99).unwrap(), &compute_linear(99).unwrap());
//! assert_eq!(
//!     compute_linear(100).unwrap(),
//!     BigUint::parse_bytes(b"354224848179261915075", 10).unwrap()
//! );
//! ```

pub mod cache;
pub mod fibonacci;
pub mod options;

pub use cache::{CacheByIndex, CacheByMap};
pub use fibonacci::{
    compute_linear, compute_recursive, compute_recursive_explicit_stack, compute_recursive_with,
    sequence, FibSequence, FibonacciError, Index, Term,
};
pub use options::{Options, DEFAULT_MAX_RECURSION_DEPTH};
