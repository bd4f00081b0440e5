//! N-Hit admission policy, lowest-hit-count eviction (§4.7).
//!
//! Unlike the LRU-eviction flavor, the tracking table here is never bounded
//! (SPEC_FULL.md §9 item 3) — it grows with the number of distinct keys ever
//! seen. The two flavors exist to let a caller compare that memory tradeoff
//! directly, so this is reproduced rather than "fixed".

use std::collections::{BTreeMap, HashMap};

use crate::error::PolicyError;
use crate::policy::{Outcome, PolicyEngine};

/// Evicts, on promotion into a full cache, the resident whose `(hit_count,
/// insertion_seq)` tuple is smallest — lowest hit count first, oldest
/// insertion breaking ties.
#[derive(Debug)]
pub struct NHitLowestPolicy {
    capacity: usize,
    trigger_threshold: f64,
    insertion_threshold: u64,
    cache: HashMap<u64, u64>,
    tracking: HashMap<u64, u64>,
    index: BTreeMap<(u64, u64), u64>,
    reverse_index: HashMap<u64, (u64, u64)>,
    insertion_seq: u64,
}

impl NHitLowestPolicy {
    /// Construct a new N-Hit (lowest-count-eviction) policy.
    pub fn new(
        capacity: usize,
        trigger_threshold: f64,
        insertion_threshold: u64,
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
        if insertion_threshold == 0 {
            return Err(PolicyError::NonPositiveParameter {
                name: "insertion_threshold",
                value: 0,
            });
        }
        Ok(Self {
            capacity,
            trigger_threshold,
            insertion_threshold,
            cache: HashMap::new(),
            tracking: HashMap::new(),
            index: BTreeMap::new(),
            reverse_index: HashMap::new(),
            insertion_seq: 0,
        })
    }

    fn evict_minimum(&mut self) {
        if let Some((&min_tuple, &victim_key)) = self.index.iter().next() {
            self.index.remove(&min_tuple);
            self.cache.remove(&victim_key);
            self.reverse_index.remove(&victim_key);
        }
    }
}

impl PolicyEngine for NHitLowestPolicy {
    fn on_request(&mut self, key: u64) -> Outcome {
        if self.cache.contains_key(&key) {
            return Outcome::Hit;
        }

        let count = {
            let entry = self.tracking.entry(key).or_insert(0);
            *entry += 1;
            *entry
        };

        // Strict `<`, not `<=`: with `trigger_threshold == 0` (used to force every
        // admission through the insertion-threshold path) an empty cache's 0%
        // occupancy must not itself satisfy the trigger.
        let occupancy_percent = 100.0 * self.cache.len() as f64 / self.capacity as f64;
        let should_promote =
            occupancy_percent < self.trigger_threshold || count >= self.insertion_threshold;

        if should_promote {
            if self.cache.len() == self.capacity {
                self.evict_minimum();
            }
            self.insertion_seq += 1;
            let tuple = (count, self.insertion_seq);
            self.index.insert(tuple, key);
            self.reverse_index.insert(key, tuple);
            self.cache.insert(key, count);
        }

        Outcome::Miss
    }

    fn occupancy(&self) -> usize {
        self.cache.len()
    }
}
