//! Randomized trace property tests (§8 closing paragraph): invariants 1-5 and
//! the Belady-optimality law (invariant 7), checked over many random traces
//! rather than hand-picked scenarios.

use cachesim_core::policy::{precompute_next_use, PolicyEngine};
use cachesim_core::{
    ArcPolicy, BeladyPolicy, LarcPolicy, LruPolicy, NHitLowestPolicy, NHitLruPolicy,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_trace(rng: &mut StdRng, len: usize, alphabet: u64) -> Vec<u64> {
    (0..len).map(|_| rng.gen_range(0..alphabet)).collect()
}

fn cases() -> Vec<(u64, usize, u64)> {
    // (seed, trace length, alphabet size); capacity is derived per-case.
    vec![
        (1, 100, 10),
        (2, 500, 50),
        (3, 1_000, 8),
        (4, 2_000, 200),
        (5, 10_000, 30),
        (6, 300, 1),
    ]
}

#[test]
fn lru_occupancy_never_exceeds_capacity() {
    for (seed, len, alphabet) in cases() {
        let mut rng = StdRng::seed_from_u64(seed);
        let trace = random_trace(&mut rng, len, alphabet);
        let capacity = 1 + (seed as usize % 256);
        let mut policy = LruPolicy::new(capacity).unwrap();
        for key in trace {
            policy.on_request(key);
            assert!(policy.occupancy() <= capacity);
        }
    }
}

#[test]
fn arc_invariants_hold_on_random_traces() {
    for (seed, len, alphabet) in cases() {
        let mut rng = StdRng::seed_from_u64(seed + 100);
        let trace = random_trace(&mut rng, len, alphabet);
        let capacity = 1 + (seed as usize % 256);
        let mut policy = ArcPolicy::new(capacity).unwrap();
        for key in trace {
            policy.on_request(key);
            assert!(policy.occupancy() <= capacity);
            assert!(policy.p() <= capacity);
        }
    }
}

#[test]
fn larc_cache_and_recent_cache_never_overlap_on_random_traces() {
    for (seed, len, alphabet) in cases() {
        let mut rng = StdRng::seed_from_u64(seed + 200);
        let trace = random_trace(&mut rng, len, alphabet);
        let capacity = 1 + (seed as usize % 256);
        let mut policy = LarcPolicy::new(capacity).unwrap();
        for key in trace {
            policy.on_request(key);
            let limit = policy.recent_cache_limit();
            assert!(limit >= 0.1 * capacity as f64 - 1e-9);
            assert!(limit <= 0.9 * capacity as f64 + 1e-9);
            assert!(policy.occupancy() <= capacity);
        }
    }
}

#[test]
fn nhit_variants_never_exceed_capacity_on_random_traces() {
    for (seed, len, alphabet) in cases() {
        let mut rng = StdRng::seed_from_u64(seed + 300);
        let trace = random_trace(&mut rng, len, alphabet);
        let capacity = 1 + (seed as usize % 256);

        let mut lru_variant = NHitLruPolicy::new(capacity, 80.0, 2, 2.0).unwrap();
        let mut lowest_variant = NHitLowestPolicy::new(capacity, 80.0, 2).unwrap();
        for &key in &trace {
            lru_variant.on_request(key);
            lowest_variant.on_request(key);
            assert!(lru_variant.occupancy() <= capacity);
            assert!(lowest_variant.occupancy() <= capacity);
        }
    }
}

/// Belady/OPT must never do worse than any other policy in the suite on the
/// same trace and capacity.
#[test]
fn belady_is_never_worse_than_the_other_policies() {
    for (seed, len, alphabet) in cases() {
        let mut rng = StdRng::seed_from_u64(seed + 400);
        let trace = random_trace(&mut rng, len, alphabet);
        let capacity = 1 + (seed as usize % 16);

        let next_use = precompute_next_use(&trace);
        let mut belady = BeladyPolicy::new(capacity, next_use).unwrap();
        let belady_hits = run_and_count_hits(&mut belady, &trace);

        let mut lru = LruPolicy::new(capacity).unwrap();
        let lru_hits = run_and_count_hits(&mut lru, &trace);
        assert!(belady_hits >= lru_hits, "Belady underperformed LRU");

        let mut arc = ArcPolicy::new(capacity).unwrap();
        let arc_hits = run_and_count_hits(&mut arc, &trace);
        assert!(belady_hits >= arc_hits, "Belady underperformed ARC");

        let mut larc = LarcPolicy::new(capacity).unwrap();
        let larc_hits = run_and_count_hits(&mut larc, &trace);
        assert!(belady_hits >= larc_hits, "Belady underperformed LARC");
    }
}

fn run_and_count_hits(policy: &mut dyn PolicyEngine, trace: &[u64]) -> usize {
    let mut hits = 0;
    for &key in trace {
        if policy.on_request(key).is_hit() {
            hits += 1;
        }
    }
    hits
}
