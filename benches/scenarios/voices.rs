//! Benchmarks for single voices and voice banks.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pulse_graph::{
    graph::{NoteReceiver, SignalSource},
    synth::PolySynth,
    voices,
};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];

        // === PLAIN VOICE ===
        let mut pluck = voices::pluck();
        pluck.note_on(0.0, "a2".parse().unwrap());
        group.bench_with_input(BenchmarkId::new("voices::pluck", size), &size, |b, _| {
            b.iter(|| {
                for (i, out) in buffer.iter_mut().enumerate() {
                    *out = pluck.sample(black_box(i as f64 / SAMPLE_RATE));
                }
            })
        });

        // === PITCH-MODULATED VOICE ===
        let mut kick = voices::kick();
        kick.note_on(0.0, "a1".parse().unwrap());
        group.bench_with_input(BenchmarkId::new("voices::kick", size), &size, |b, _| {
            b.iter(|| {
                for (i, out) in buffer.iter_mut().enumerate() {
                    *out = kick.sample(black_box(i as f64 / SAMPLE_RATE));
                }
            })
        });

        // === FULL BANK ===
        // 16 voices, all sounding
        let mut bank = PolySynth::new(voices::pluck, 16).unwrap();
        for n in 0..16 {
            bank.note_on(n as f64 * 0.001, "c3".parse().unwrap());
        }
        group.bench_with_input(BenchmarkId::new("poly16", size), &size, |b, _| {
            b.iter(|| {
                for (i, out) in buffer.iter_mut().enumerate() {
                    *out = bank.sample(black_box(0.02 + i as f64 / SAMPLE_RATE));
                }
            })
        });
    }

    group.finish();
}
