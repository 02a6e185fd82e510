//! Benchmarks for waveform evaluation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pulse_graph::dsp::{OscillatorWaveform, Waveform};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    let waveforms = [
        ("sine", OscillatorWaveform::Sine),
        ("saw", OscillatorWaveform::Saw),
        ("square", OscillatorWaveform::Square),
        ("triangle", OscillatorWaveform::Triangle),
    ];

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];

        for (name, wave) in waveforms {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for (i, out) in buffer.iter_mut().enumerate() {
                        *out = wave.evaluate(black_box(i as f64 / SAMPLE_RATE), black_box(440.0));
                    }
                })
            });
        }
    }

    group.finish();
}
