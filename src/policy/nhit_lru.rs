//! N-Hit admission policy, LRU-backed eviction (§4.6).

use std::collections::{HashMap, VecDeque};
use std::num::NonZeroUsize;

use lru::LruCache;

use crate::error::PolicyError;
use crate::policy::{Outcome, PolicyEngine};

/// Requires `n` prior references (tracked in a bounded FIFO-evicted table)
/// before admitting a key into an LRU-evicted cache — unless the cache is
/// still under `trigger_threshold` occupancy, in which case every miss is
/// admitted immediately.
#[derive(Debug)]
pub struct NHitLruPolicy {
    capacity: usize,
    trigger_threshold: f64,
    n: u64,
    max_tracked: usize,
    cache: LruCache<u64, ()>,
    counts: HashMap<u64, u64>,
    tracking_queue: VecDeque<u64>,
}

impl NHitLruPolicy {
    /// Construct a new N-Hit (LRU-eviction) policy.
    ///
    /// `trigger_threshold` is a percentage in `0..=100`; `n` and
    /// `tracking_ratio` must be positive. `max_tracked = tracking_ratio *
    /// capacity` bounds the tracker's memory.
    pub fn new(
        capacity: usize,
        trigger_threshold: f64,
        n: u64,
        tracking_ratio: f64,
    ) -> Result<Self, PolicyError> {
        if capacity == 0 {
            return Err(PolicyError::NonPositiveCapacity(0));
        }
        if !(0.0..=100.0).contains(&trigger_threshold) {
            return Err(PolicyError::ThresholdOutOfRange {
                name: "trigger_threshold",
                value: trigger_threshold as i64,
            });
        }
        if n == 0 {
            return Err(PolicyError::NonPositiveParameter {
                name: "n",
                value: 0,
            });
        }
        if tracking_ratio <= 0.0 {
            return Err(PolicyError::NonPositiveParameter {
                name: "tracking_ratio",
                value: tracking_ratio as i64,
            });
        }
        let max_tracked = (tracking_ratio * capacity as f64) as usize;
        Ok(Self {
            capacity,
            trigger_threshold,
            n,
            max_tracked: max_tracked.max(1),
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap()),
            counts: HashMap::new(),
            tracking_queue: VecDeque::new(),
        })
    }

    fn record_access(&mut self, key: u64) {
        if let Some(count) = self.counts.get_mut(&key) {
            *count += 1;
            return;
        }
        if self.counts.len() >= self.max_tracked {
            if let Some(oldest) = self.tracking_queue.pop_front() {
                self.counts.remove(&oldest);
            }
        }
        self.counts.insert(key, 1);
        self.tracking_queue.push_back(key);
    }

    fn remove_from_tracking(&mut self, key: u64) {
        if self.counts.remove(&key).is_some() {
            if let Some(pos) = self.tracking_queue.iter().position(|k| *k == key) {
                self.tracking_queue.remove(pos);
            }
        }
    }
}

impl PolicyEngine for NHitLruPolicy {
    fn on_request(&mut self, key: u64) -> Outcome {
        self.record_access(key);

        if self.cache.peek(&key).is_some() {
            self.cache.get(&key);
            return Outcome::Hit;
        }

        // Strict `<`, not `<=`: see the lowest-count-eviction variant for why an
        // empty cache at `trigger_threshold == 0` must not itself satisfy the trigger.
        let occupancy_percent = 100.0 * self.cache.len() as f64 / self.capacity as f64;
        let promote =
            occupancy_percent < self.trigger_threshold || self.counts[&key] >= self.n;
        if promote {
            self.cache.put(key, ());
            self.remove_from_tracking(key);
        }
        Outcome::Miss
    }

    fn occupancy(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_immediately_below_trigger_threshold() {
        let mut policy = NHitLruPolicy::new(10, 80.0, 2, 2.0).unwrap();
        assert_eq!(policy.on_request(1), Outcome::Miss);
        assert!(policy.cache.contains(&1));
    }

    #[test]
    fn requires_n_references_above_trigger_threshold() {
        let mut policy = NHitLruPolicy::new(2, 0.0, 3, 2.0).unwrap();
        // trigger_threshold 0 with strict `<` means the occupancy shortcut never
        // fires, even on an empty cache: every admission goes through `n`.
        assert_eq!(policy.on_request(1), Outcome::Miss);
        assert!(!policy.cache.contains(&1));
        assert_eq!(policy.on_request(1), Outcome::Miss);
        assert!(!policy.cache.contains(&1));
        assert_eq!(policy.on_request(1), Outcome::Miss);
        assert!(policy.cache.contains(&1), "3rd reference should promote");
    }

    #[test]
    fn tracker_never_exceeds_tracking_ratio_times_capacity() {
        let mut policy = NHitLruPolicy::new(4, 0.0, 100, 2.0).unwrap();
        for key in 0..1000u64 {
            policy.on_request(key);
            assert!(policy.counts.len() <= policy.max_tracked);
            assert_eq!(policy.counts.len(), policy.tracking_queue.len());
        }
    }

    #[test]
    fn occupancy_never_exceeds_capacity() {
        let mut policy = NHitLruPolicy::new(4, 80.0, 2, 2.0).unwrap();
        for key in 0..100u64 {
            policy.on_request(key);
            assert!(policy.occupancy() <= 4);
        }
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(NHitLruPolicy::new(0, 80.0, 2, 2.0).is_err());
        assert!(NHitLruPolicy::new(10, 150.0, 2, 2.0).is_err());
        assert!(NHitLruPolicy::new(10, 80.0, 0, 2.0).is_err());
        assert!(NHitLruPolicy::new(10, 80.0, 2, 0.0).is_err());
    }
}
