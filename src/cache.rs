use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use crate::fibonacci::{
    check_depth, checked_index, sequence, FibSequence, FibonacciError, Index, Term,
};
use crate::options::Options;

/// Memoizer backed by a [`FibSequence`] and an append-only list of terms.
///
/// Position `i` of the list always holds F(i). The list only ever grows, and
/// only as far as the highest index requested so far.
///
/// # Example
/// ```
/// use fibonacci_strategies::CacheByIndex;
/// use num_bigint::BigUint;
/// let mut cache = CacheByIndex::new();
/// assert_eq!(cache.get(5).unwrap(), &BigUint::from(5u32));
/// assert_eq!(cache.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct CacheByIndex {
    terms: FibSequence,
    cache: Vec<Term>,
}

impl CacheByIndex {
    #[must_use]
    pub fn new() -> Self {
        Self {
            terms: sequence(),
            cache: Vec::new(),
        }
    }

    /// Returns F(n), pulling terms from the sequence until position `n` is cached.
    pub fn get(&mut self, n: Index) -> Result<&Term, FibonacciError> {
        let n = checked_index(n)?;

        if self.cache.len() <= n {
            let from = self.cache.len();
            self.cache.extend(self.terms.by_ref().take(n + 1 - from));
            debug!(from, to = self.cache.len(), "extended ordered cache");
        }

        Ok(&self.cache[n])
    }

    /// Number of cached terms, i.e. one past the highest index computed so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn as_slice(&self) -> &[Term] {
        &self.cache
    }
}

impl Default for CacheByIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Memoizer that stores terms in a map keyed by index and resolves missing
/// entries recursively.
///
/// Seeded with F(0) and F(1). Filling index `k` always fills `k - 1` and
/// `k - 2` first, so the cached indices are exactly `0..=highest`. Each index
/// is computed at most once per instance.
#[derive(Debug, Clone)]
pub struct CacheByMap {
    cache: HashMap<usize, Term>,
    options: Options,
}

impl CacheByMap {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    #[must_use]
    pub fn with_options(options: Options) -> Self {
        let mut cache = HashMap::new();
        cache.insert(0, BigUint::zero());
        cache.insert(1, BigUint::one());
        Self { cache, options }
    }

    /// Returns F(n), recursively resolving and storing any missing dependencies.
    ///
    /// Recursion depth is the distance from the highest cached index to `n`;
    /// a request deeper than `max_recursion_depth` fails without touching the
    /// cache. [`CacheByMap::get_iterative`] has no such limit.
    pub fn get(&mut self, n: Index) -> Result<&Term, FibonacciError> {
        let n = checked_index(n)?;

        if !self.cache.contains_key(&n) {
            check_depth(n - self.highest(), &self.options)?;
            let from = self.cache.len();
            self.fill(n);
            debug!(from, to = self.cache.len(), "filled sparse cache");
        }

        Ok(&self.cache[&n])
    }

    /// Same contract as [`CacheByMap::get`], resolved through an explicit
    /// work-list instead of the call stack.
    pub fn get_iterative(&mut self, n: Index) -> Result<&Term, FibonacciError> {
        let n = checked_index(n)?;
        let from = self.cache.len();
        let mut pending = vec![n];

        while let Some(&k) = pending.last() {
            if self.cache.contains_key(&k) {
                pending.pop();
                continue;
            }
            // k - 1 present implies k - 2 present
            if !self.cache.contains_key(&(k - 1)) {
                pending.push(k - 1);
                continue;
            }
            let term = &self.cache[&(k - 1)] + &self.cache[&(k - 2)];
            self.cache.insert(k, term);
            pending.pop();
        }

        if self.cache.len() > from {
            debug!(from, to = self.cache.len(), "filled sparse cache iteratively");
        }

        Ok(&self.cache[&n])
    }

    fn fill(&mut self, n: usize) {
        if self.cache.contains_key(&n) {
            return;
        }
        // 0 and 1 are seeded, so n >= 2 here
        self.fill(n - 1);
        self.fill(n - 2);
        let term = &self.cache[&(n - 1)] + &self.cache[&(n - 2)];
        self.cache.insert(n, term);
    }

    fn highest(&self) -> usize {
        self.cache.len() - 1
    }

    pub fn contains(&self, n: Index) -> bool {
        usize::try_from(n).is_ok_and(|n| self.cache.contains_key(&n))
    }

    /// Number of cached terms, seeds included.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Always false: the seeds are present from construction.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl Default for CacheByMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fibonacci::compute_linear;

    #[test]
    fn by_index_starts_empty() {
        let cache = CacheByIndex::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn by_index_known_values() {
        let mut cache = CacheByIndex::new();
        assert_eq!(cache.get(0).unwrap(), &BigUint::zero());
        assert_eq!(cache.get(1).unwrap(), &BigUint::one());
        assert_eq!(cache.get(2).unwrap(), &BigUint::one());
        assert_eq!(cache.get(10).unwrap(), &BigUint::from(55u32));
    }

    #[test]
    fn by_index_growth_is_monotonic() {
        let mut cache = CacheByIndex::new();
        cache.get(5).unwrap();
        cache.get(3).unwrap();
        assert_eq!(cache.len(), 6);
    }

    #[test]
    fn by_index_repeat_does_not_grow() {
        let mut cache = CacheByIndex::new();
        let first = cache.get(40).unwrap().clone();
        let len = cache.len();
        assert_eq!(cache.get(40).unwrap(), &first);
        assert_eq!(cache.len(), len);
    }

    #[test]
    fn by_index_slice_holds_sequence() {
        let mut cache = CacheByIndex::new();
        cache.get(7).unwrap();
        let vals: Vec<u64> = cache
            .as_slice()
            .iter()
            .map(|v| v.try_into().unwrap())
            .collect();
        assert_eq!(vals, [0, 1, 1, 2, 3, 5, 8, 13]);
    }

    #[test]
    fn by_index_rejects_negative() {
        let mut cache = CacheByIndex::new();
        assert_eq!(cache.get(-1), Err(FibonacciError::InvalidIndex(-1)));
        assert!(cache.is_empty());
    }

    #[test]
    fn by_map_is_seeded() {
        let cache = CacheByMap::new();
        assert_eq!(cache.len(), 2);
        assert!(cache.contains(0));
        assert!(cache.contains(1));
        assert!(!cache.contains(2));
        assert!(!cache.contains(-1));
    }

    #[test]
    fn by_map_fills_all_dependencies() {
        let mut cache = CacheByMap::new();
        assert_eq!(cache.get(10).unwrap(), &BigUint::from(55u32));
        assert_eq!(cache.len(), 11);
        for k in 0..=10 {
            assert!(cache.contains(k), "index {k} should be cached");
        }
        assert!(!cache.contains(11));
    }

    #[test]
    fn by_map_repeat_does_not_grow() {
        let mut cache = CacheByMap::new();
        let first = cache.get(30).unwrap().clone();
        assert_eq!(cache.get(30).unwrap(), &first);
        assert_eq!(cache.get(12).unwrap(), &BigUint::from(144u32));
        assert_eq!(cache.len(), 31);
    }

    #[test]
    fn by_map_depth_is_relative_to_cached_prefix() {
        let opts = Options::default().with_max_recursion_depth(50);
        let mut cache = CacheByMap::with_options(opts);
        assert_eq!(
            cache.get(200),
            Err(FibonacciError::RecursionLimitExceeded {
                depth: 199,
                limit: 50
            })
        );
        assert_eq!(cache.len(), 2);

        // Walking up in steps within the limit reaches the same index
        for n in (50..=200).step_by(50) {
            cache.get(n).unwrap();
        }
        assert_eq!(cache.get(200).unwrap(), &compute_linear(200).unwrap());
    }

    #[test]
    fn by_map_iterative_ignores_depth_limit() {
        let opts = Options::default().with_max_recursion_depth(4);
        let mut cache = CacheByMap::with_options(opts);
        assert_eq!(
            cache.get_iterative(500).unwrap(),
            &compute_linear(500).unwrap()
        );
        assert_eq!(cache.len(), 501);
        // Now cached, so the recursive path needs no depth at all
        assert_eq!(cache.get(500).unwrap(), &compute_linear(500).unwrap());
    }

    #[test]
    fn by_map_iterative_and_recursive_agree() {
        let mut recursive = CacheByMap::new();
        let mut iterative = CacheByMap::new();
        for n in [7, 3, 25, 25, 0, 60] {
            assert_eq!(recursive.get(n).unwrap(), iterative.get_iterative(n).unwrap());
        }
        assert_eq!(recursive.len(), iterative.len());
    }

    #[test]
    fn by_map_rejects_negative() {
        let mut cache = CacheByMap::new();
        assert_eq!(cache.get(-2), Err(FibonacciError::InvalidIndex(-2)));
        assert_eq!(cache.get_iterative(-2), Err(FibonacciError::InvalidIndex(-2)));
    }
}
