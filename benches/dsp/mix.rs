//! Benchmarks for channel summing.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pulse_graph::{
    dsp::OscillatorWaveform,
    graph::{Mixer, NoteReceiver, SignalSource},
    synth::Voice,
    voices,
};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mix");

    for &channels in &[2usize, 8, 32] {
        let mut mixer: Mixer<Voice> = Mixer::new(0.9);
        for _ in 0..channels {
            let mut voice = voices::pluck();
            voice.note_on(0.0, "a2".parse().unwrap());
            mixer.add_channel(voice, 1.0 / channels as f64);
        }

        for &size in BLOCK_SIZES {
            let mut buffer = vec![0.0f64; size];
            let id = format!("{channels}ch");
            group.bench_with_input(BenchmarkId::new(id, size), &size, |b, _| {
                b.iter(|| {
                    for (i, out) in buffer.iter_mut().enumerate() {
                        *out = mixer.sample(black_box(i as f64 / SAMPLE_RATE));
                    }
                })
            });
        }
    }

    // Empty voices skip waveform evaluation entirely
    let mut silent: Mixer<Voice> = Mixer::new(0.9);
    for _ in 0..32 {
        silent.add_channel(Voice::new(OscillatorWaveform::Saw, Default::default()), 0.1);
    }
    let mut buffer = vec![0.0f64; 512];
    group.bench_function("32ch_silent/512", |b| {
        b.iter(|| {
            for (i, out) in buffer.iter_mut().enumerate() {
                *out = silent.sample(black_box(i as f64 / SAMPLE_RATE));
            }
        })
    });

    group.finish();
}
