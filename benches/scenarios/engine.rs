//! Benchmarks for complete engines, sequencers included.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pulse_graph::engine::{demo, Engine};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/engine");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];
        let mut engine = Engine::from_config(&demo()).unwrap();
        let mut frame: u64 = 0;

        // Time keeps advancing across iterations so sequencers keep firing
        group.bench_with_input(BenchmarkId::new("demo", size), &size, |b, _| {
            b.iter(|| {
                for out in buffer.iter_mut() {
                    *out = engine.sample(black_box(frame as f64 / SAMPLE_RATE));
                    frame += 1;
                }
            })
        });
    }

    group.finish();
}
