//! The common policy contract, the six concrete engines, and the [`Policy`] sum type
//! that lets the driver dispatch to any of them without a vtable.

mod arc;
mod belady;
mod larc;
mod lru;
mod nhit_lowest;
mod nhit_lru;

pub use arc::ArcPolicy;
pub use belady::{precompute_next_use, BeladyPolicy};
pub use larc::LarcPolicy;
pub use lru::LruPolicy;
pub use nhit_lowest::NHitLowestPolicy;
pub use nhit_lru::NHitLruPolicy;

/// Result of a single [`Policy::on_request`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The key was already resident.
    Hit,
    /// The key was not resident; it may or may not have been admitted,
    /// depending on the policy.
    Miss,
}

impl Outcome {
    /// `true` iff this is [`Outcome::Hit`].
    pub fn is_hit(self) -> bool {
        matches!(self, Outcome::Hit)
    }
}

/// A sequential cache-policy state machine.
///
/// `on_request` is the only mutator; `occupancy` is a pure query. Implementations
/// never retain a key beyond their internal tables and never fail — invalid
/// construction parameters are rejected once, at `new`, not per-request.
pub trait PolicyEngine {
    /// Record an access to `key`, updating internal state, and classify it.
    fn on_request(&mut self, key: u64) -> Outcome;

    /// Current number of resident entries.
    fn occupancy(&self) -> usize;
}

/// Sum type over the six concrete policy engines.
///
/// Using a sum type with a `match` in `on_request` (rather than `Box<dyn
/// PolicyEngine>`) keeps dispatch static: the driver's hot loop never goes
/// through a vtable, and exhaustiveness checking means adding a seventh
/// variant is a compile error everywhere it isn't yet handled.
#[derive(Debug)]
pub enum Policy {
    /// Baseline recency policy.
    Lru(LruPolicy),
    /// Offline-optimal policy, driven from a precomputed next-use array.
    Belady(BeladyPolicy),
    /// Adaptive Replacement Cache.
    Arc(ArcPolicy),
    /// Admission-filter policy with an adaptive recent-history window.
    Larc(LarcPolicy),
    /// N-Hit admission policy, LRU-backed eviction.
    NHitLru(NHitLruPolicy),
    /// N-Hit admission policy, lowest-hit-count eviction.
    NHitLowest(NHitLowestPolicy),
}

impl Policy {
    /// Record an access to `key` and classify it.
    pub fn on_request(&mut self, key: u64) -> Outcome {
        match self {
            Policy::Lru(p) => p.on_request(key),
            Policy::Belady(p) => p.on_request(key),
            Policy::Arc(p) => p.on_request(key),
            Policy::Larc(p) => p.on_request(key),
            Policy::NHitLru(p) => p.on_request(key),
            Policy::NHitLowest(p) => p.on_request(key),
        }
    }

    /// Current number of resident entries.
    pub fn occupancy(&self) -> usize {
        match self {
            Policy::Lru(p) => p.occupancy(),
            Policy::Belady(p) => p.occupancy(),
            Policy::Arc(p) => p.occupancy(),
            Policy::Larc(p) => p.occupancy(),
            Policy::NHitLru(p) => p.occupancy(),
            Policy::NHitLowest(p) => p.occupancy(),
        }
    }

    /// Whether this policy variant is one of the two N-Hit flavors, for which
    /// the driver additionally tracks cold misses (§4.8).
    pub fn tracks_cold_misses(&self) -> bool {
        matches!(self, Policy::NHitLru(_) | Policy::NHitLowest(_))
    }
}
