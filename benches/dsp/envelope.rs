//! Benchmarks for the attack/decay envelope.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pulse_graph::dsp::{AttackDecay, Envelope};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];

        // Attack phase (ramping up)
        let mut env = AttackDecay::new(0.1, 0.1);
        env.trigger(0.0);
        group.bench_with_input(BenchmarkId::new("attack", size), &size, |b, _| {
            b.iter(|| {
                for (i, out) in buffer.iter_mut().enumerate() {
                    *out = env.value(black_box(i as f64 / SAMPLE_RATE));
                }
            })
        });

        // Decay phase (ramping down)
        let mut env = AttackDecay::new(0.0, 0.5);
        env.trigger(0.0);
        group.bench_with_input(BenchmarkId::new("decay", size), &size, |b, _| {
            b.iter(|| {
                for (i, out) in buffer.iter_mut().enumerate() {
                    *out = env.value(black_box(0.1 + i as f64 / SAMPLE_RATE));
                }
            })
        });

        // Never triggered (early-out)
        let env = AttackDecay::new(0.01, 0.2);
        group.bench_with_input(BenchmarkId::new("idle", size), &size, |b, _| {
            b.iter(|| {
                for (i, out) in buffer.iter_mut().enumerate() {
                    *out = env.value(black_box(i as f64 / SAMPLE_RATE));
                }
            })
        });
    }

    group.finish();
}
