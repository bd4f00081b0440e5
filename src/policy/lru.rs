//! Baseline recency policy (§4.2).

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::error::PolicyError;
use crate::policy::{Outcome, PolicyEngine};

/// Evicts the least-recently-used key once the cache is at capacity.
///
/// Backed by the `lru` crate's `LruCache`, whose `get`/`push` already give the
/// O(1) move-to-end and O(1) evict-oldest operations the ordered-mapping state
/// in §3 calls for.
#[derive(Debug)]
pub struct LruPolicy {
    cache: LruCache<u64, ()>,
}

impl LruPolicy {
    /// Construct a new LRU policy with the given capacity.
    pub fn new(capacity: usize) -> Result<Self, PolicyError> {
        let capacity = NonZeroUsize::new(capacity)
            .ok_or(PolicyError::NonPositiveCapacity(capacity as i64))?;
        Ok(Self {
            cache: LruCache::new(capacity),
        })
    }
}

impl PolicyEngine for LruPolicy {
    fn on_request(&mut self, key: u64) -> Outcome {
        if self.cache.get(&key).is_some() {
            return Outcome::Hit;
        }
        self.cache.put(key, ());
        Outcome::Miss
    }

    fn occupancy(&self) -> usize {
        self.cache.len()
    }
}
