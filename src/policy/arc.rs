//! Adaptive Replacement Cache (§4.4).
//!
//! Reproduces the source's divergent variant rather than canonical ARC: Case IV
//! (a brand-new key) inserts into `T1` without a preceding `REPLACE`, relying on
//! the post-insertion balancing loop instead (see `SPEC_FULL.md` §9, item 1).

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::error::PolicyError;
use crate::policy::{Outcome, PolicyEngine};

/// Four coupled recency-ordered sets (`T1`, `T2` resident, `B1`, `B2` ghost)
/// plus the adaptation target `p`.
#[derive(Debug)]
pub struct ArcPolicy {
    capacity: usize,
    p: usize,
    t1: LruCache<u64, ()>,
    t2: LruCache<u64, ()>,
    b1: LruCache<u64, ()>,
    b2: LruCache<u64, ()>,
}

impl ArcPolicy {
    /// Construct a new ARC policy with the given capacity and `p` initialized to 0.
    pub fn new(capacity: usize) -> Result<Self, PolicyError> {
        if capacity == 0 {
            return Err(PolicyError::NonPositiveCapacity(0));
        }
        // Each set is only ever trimmed by our own balancing/trimming loops, never
        // by the `lru` crate's own capacity eviction, so size them with headroom.
        let set_cap = NonZeroUsize::new(2 * capacity + 2).unwrap();
        Ok(Self {
            capacity,
            p: 0,
            t1: LruCache::new(set_cap),
            t2: LruCache::new(set_cap),
            b1: LruCache::new(set_cap),
            b2: LruCache::new(set_cap),
        })
    }

    /// Current adaptation target, exposed for tests and diagnostics.
    pub fn p(&self) -> usize {
        self.p
    }

    fn case2_p_update(&mut self) {
        let b1 = self.b1.len().max(1);
        let b2 = self.b2.len();
        let raw = (b2 + b1 - 1) / b1;
        let delta = raw.max(1);
        self.p = (self.p + delta).min(self.capacity);
    }

    fn case3_p_update(&mut self) {
        let b2 = self.b2.len().max(1);
        let b1 = self.b1.len();
        let raw = (b1 + b2 - 1) / b2;
        let delta = raw.max(1);
        self.p = self.p.saturating_sub(delta);
    }

    /// Moves one entry from the resident sets to the matching ghost list,
    /// favoring `T1` when it exceeds `p` (or ties with `p` while `key` is a
    /// `B2` ghost), otherwise `T2`.
    fn replace(&mut self, key: u64) {
        let t1_len = self.t1.len();
        if t1_len > 0 && (t1_len > self.p || (self.b2.contains(&key) && t1_len == self.p)) {
            if let Some((old_key, _)) = self.t1.pop_lru() {
                self.b1.put(old_key, ());
            }
        } else if let Some((old_key, _)) = self.t2.pop_lru() {
            self.b2.put(old_key, ());
        }
    }

    fn balance(&mut self) {
        while self.t1.len() + self.t2.len() > self.capacity {
            if self.t1.len() > self.p {
                if let Some((old_key, _)) = self.t1.pop_lru() {
                    self.b1.put(old_key, ());
                }
            } else if let Some((old_key, _)) = self.t2.pop_lru() {
                self.b2.put(old_key, ());
            } else {
                break;
            }
        }
    }

    fn trim_ghosts(&mut self) {
        while self.t1.len() + self.t2.len() + self.b1.len() + self.b2.len() > 2 * self.capacity {
            if self.b1.len() > self.p {
                if self.b1.pop_lru().is_none() {
                    break;
                }
            } else if self.b2.pop_lru().is_none() {
                break;
            }
        }
    }
}

impl PolicyEngine for ArcPolicy {
    fn on_request(&mut self, key: u64) -> Outcome {
        let outcome = if self.t1.contains(&key) {
            self.t1.pop(&key);
            self.t2.put(key, ());
            Outcome::Hit
        } else if self.t2.contains(&key) {
            self.t2.get(&key);
            Outcome::Hit
        } else if self.b1.contains(&key) {
            self.case2_p_update();
            self.replace(key);
            self.b1.pop(&key);
            self.t2.put(key, ());
            Outcome::Miss
        } else if self.b2.contains(&key) {
            self.case3_p_update();
            self.replace(key);
            self.b2.pop(&key);
            self.t2.put(key, ());
            Outcome::Miss
        } else {
            self.t1.put(key, ());
            Outcome::Miss
        };

        self.balance();
        self.trim_ghosts();
        outcome
    }

    fn occupancy(&self) -> usize {
        self.t1.len() + self.t2.len()
    }
}
