//! Admission-filter policy with an adaptive recent-history window (§4.5).

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::error::PolicyError;
use crate::policy::{Outcome, PolicyEngine};

/// `cache` holds admitted keys; `recent_cache` is the admission filter a key
/// must survive one prior miss in before it is promoted into `cache`.
#[derive(Debug)]
pub struct LarcPolicy {
    capacity: usize,
    recent_cache_limit: f64,
    cache: LruCache<u64, ()>,
    recent_cache: LruCache<u64, ()>,
}

impl LarcPolicy {
    /// Construct a new LARC policy. `recent_cache_limit` starts at `0.1 *
    /// capacity`, the lower end of its clamp range.
    pub fn new(capacity: usize) -> Result<Self, PolicyError> {
        if capacity == 0 {
            return Err(PolicyError::NonPositiveCapacity(0));
        }
        let set_cap = NonZeroUsize::new(capacity + 1).unwrap();
        Ok(Self {
            capacity,
            recent_cache_limit: 0.1 * capacity as f64,
            cache: LruCache::new(set_cap),
            recent_cache: LruCache::new(set_cap),
        })
    }

    /// Current value of the adaptive recent-history limit, for tests.
    pub fn recent_cache_limit(&self) -> f64 {
        self.recent_cache_limit
    }
}

impl PolicyEngine for LarcPolicy {
    fn on_request(&mut self, key: u64) -> Outcome {
        let capacity = self.capacity as f64;
        if self.cache.contains(&key) {
            self.cache.get(&key);
            // Computed from the pre-clamp value, then clamped (SPEC_FULL.md §9 item 2).
            let candidate =
                self.recent_cache_limit - capacity / (capacity - self.recent_cache_limit);
            self.recent_cache_limit = candidate.max(0.1 * capacity);
            Outcome::Hit
        } else if self.recent_cache.contains(&key) {
            let candidate = self.recent_cache_limit + capacity / self.recent_cache_limit;
            self.recent_cache_limit = candidate.min(0.9 * capacity);

            self.recent_cache.pop(&key);
            self.cache.put(key, ());
            if self.cache.len() > self.capacity {
                self.cache.pop_lru();
            }
            Outcome::Miss
        } else {
            self.recent_cache.put(key, ());
            while self.recent_cache.len() as f64 > self.recent_cache_limit {
                if self.recent_cache.pop_lru().is_none() {
                    break;
                }
            }
            Outcome::Miss
        }
    }

    fn occupancy(&self) -> usize {
        self.cache.len()
    }
}
