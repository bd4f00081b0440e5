//! Drives a [`Policy`] across a trace and accumulates [`Stats`] (§4.8).

use std::collections::HashSet;

use crate::policy::Policy;
use crate::request::Request;
use crate::stats::Stats;

/// Owns one policy and the run's accumulated statistics.
///
/// For the two N-Hit variants, the driver also tracks which keys have ever
/// been seen before, so it can attribute `cold_misses` without either N-Hit
/// engine needing its own "seen" bookkeeping.
#[derive(Debug)]
pub struct Driver {
    policy: Policy,
    stats: Stats,
    seen: Option<HashSet<u64>>,
}

impl Driver {
    /// Wrap a policy for driving. Starts with empty statistics.
    pub fn new(policy: Policy) -> Self {
        let seen = policy.tracks_cold_misses().then(HashSet::new);
        Self {
            policy,
            stats: Stats::new(),
            seen,
        }
    }

    /// Feed one request through the policy, updating statistics in place.
    pub fn step(&mut self, request: &Request) {
        let outcome = self.policy.on_request(request.key);
        self.stats.record(request.op, outcome.is_hit());

        if !outcome.is_hit() {
            if let Some(seen) = &mut self.seen {
                if seen.insert(request.key) {
                    self.stats.cold_misses += 1;
                }
            }
        }
    }

    /// Drive the whole trace in order and return the accumulated statistics.
    pub fn run<'a>(mut self, trace: impl IntoIterator<Item = &'a Request>) -> Stats {
        for request in trace {
            self.step(request);
        }
        self.stats
    }

    /// Statistics accumulated so far, without consuming the driver.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Current occupancy of the wrapped policy.
    pub fn occupancy(&self) -> usize {
        self.policy.occupancy()
    }
}
