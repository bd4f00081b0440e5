// Benchmarks driving each policy across a Zipf-distributed synthetic trace.
use cachesim_core::policy::{
    precompute_next_use, ArcPolicy, BeladyPolicy, LarcPolicy, LruPolicy, NHitLowestPolicy,
    NHitLruPolicy, PolicyEngine,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const CACHE_SIZE: usize = 1_000;
const NUM_OPERATIONS: usize = 20_000;
const KEYSPACE: usize = 10_000;

// Linear congruential generator, reproducible across runs without a `rand` dependency.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1103515245).wrapping_add(12345) & 0x7fff_ffff;
        (self.state as f64) / (0x7fff_ffff as f64)
    }
}

fn zipf_trace() -> Vec<u64> {
    let mut rng = SimpleRng::new(42);
    let skew = 1.1;
    let mut norm = 0.0;
    for i in 1..=KEYSPACE {
        norm += 1.0 / (i as f64).powf(skew);
    }

    let mut trace = Vec::with_capacity(NUM_OPERATIONS);
    for _ in 0..NUM_OPERATIONS {
        let u = rng.next_f64();
        let mut sum = 0.0;
        let mut sample = 1usize;
        while sample <= KEYSPACE {
            sum += 1.0 / (sample as f64).powf(skew) / norm;
            if sum >= u {
                break;
            }
            sample += 1;
        }
        trace.push(sample as u64);
    }
    trace
}

fn run_engine(engine: &mut dyn PolicyEngine, trace: &[u64]) {
    for &key in trace {
        black_box(engine.on_request(key));
    }
}

fn benchmark_policies(c: &mut Criterion) {
    let trace = zipf_trace();
    let next_use = precompute_next_use(&trace);
    let mut group = c.benchmark_group("policies");

    group.bench_function("LRU", |b| {
        b.iter(|| {
            let mut p = LruPolicy::new(CACHE_SIZE).unwrap();
            run_engine(&mut p, &trace);
        });
    });

    group.bench_function("Belady", |b| {
        b.iter(|| {
            let mut p = BeladyPolicy::new(CACHE_SIZE, next_use.clone()).unwrap();
            run_engine(&mut p, &trace);
        });
    });

    group.bench_function("ARC", |b| {
        b.iter(|| {
            let mut p = ArcPolicy::new(CACHE_SIZE).unwrap();
            run_engine(&mut p, &trace);
        });
    });

    group.bench_function("LARC", |b| {
        b.iter(|| {
            let mut p = LarcPolicy::new(CACHE_SIZE).unwrap();
            run_engine(&mut p, &trace);
        });
    });

    group.bench_function("NHitLru", |b| {
        b.iter(|| {
            let mut p = NHitLruPolicy::new(CACHE_SIZE, 80.0, 2, 2.0).unwrap();
            run_engine(&mut p, &trace);
        });
    });

    group.bench_function("NHitLowest", |b| {
        b.iter(|| {
            let mut p = NHitLowestPolicy::new(CACHE_SIZE, 80.0, 2).unwrap();
            run_engine(&mut p, &trace);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_policies);
criterion_main!(benches);
