//! Memoized case filtering
//!
//! Re-running the filter with unchanged inputs returns the previously
//! computed result. Inputs are keyed by a SHA-256 digest fed straight from
//! their derived `Hash` impls, so structurally equal inputs share an entry
//! regardless of where they live in memory.
//!
//! Computing the key is still a pass over every case, so a hit saves the
//! predicate evaluation and the clone of the matches, not the walk itself.

use lru::LruCache;
use sha2::{Digest, Sha256};
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::trace;

use super::criteria::FilterCriteria;
use super::filters::filter_cases;
use super::model::Case;

/// Adapts a SHA-256 digest to `std::hash::Hasher`
struct DigestHasher(Sha256);

impl Hasher for DigestHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }

    fn finish(&self) -> u64 {
        self.0
            .clone()
            .finalize()
            .iter()
            .take(8)
            .fold(0, |acc, byte| (acc << 8) | u64::from(*byte))
    }
}

/// Compute the cache key for a filter invocation
pub fn fingerprint(cases: &[Case], criteria: &FilterCriteria) -> String {
    let mut hasher = DigestHasher(Sha256::new());
    cases.hash(&mut hasher);
    criteria.hash(&mut hasher);
    format!("{:x}", hasher.0.finalize())
}

/// Case filter that reuses results for inputs it has already seen
pub struct MemoizedFilter {
    cache: LruCache<String, Arc<Vec<Case>>>,
    hits: u64,
    misses: u64,
}

impl Default for MemoizedFilter {
    fn default() -> Self {
        Self::new(1)
    }
}

impl MemoizedFilter {
    /// Create a filter remembering up to `capacity` distinct inputs
    ///
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Filter `cases`, returning a cached result when the inputs are unchanged
    pub fn filter(&mut self, cases: Option<&[Case]>, criteria: &FilterCriteria) -> Arc<Vec<Case>> {
        let key = fingerprint(cases.unwrap_or_default(), criteria);

        if let Some(cached) = self.cache.get(&key) {
            trace!("Filter cache hit for {}", &key[..12]);
            self.hits += 1;
            return Arc::clone(cached);
        }

        trace!("Filter cache miss for {}", &key[..12]);
        self.misses += 1;
        let result = Arc::new(filter_cases(cases, criteria));
        self.cache.put(key, Arc::clone(&result));
        result
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    /// Drop every cached result
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
