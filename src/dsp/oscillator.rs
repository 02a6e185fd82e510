#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::f64::consts::TAU;

/// A stateless waveform: time offset since note start (seconds) and
/// frequency (Hz) in, sample in `-1.0..=1.0` out.
///
/// Any `Fn(f64, f64) -> f64` closure is a waveform.
pub trait Waveform: Send {
    fn evaluate(&self, offset: f64, frequency: f64) -> f64;
}

impl<F> Waveform for F
where
    F: Fn(f64, f64) -> f64 + Send,
{
    fn evaluate(&self, offset: f64, frequency: f64) -> f64 {
        self(offset, frequency)
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OscillatorWaveform {
    Sine,
    #[default]
    Saw,
    Square,
    Triangle,
}

impl Waveform for OscillatorWaveform {
    fn evaluate(&self, offset: f64, frequency: f64) -> f64 {
        match self {
            OscillatorWaveform::Sine => sine(offset, frequency),
            OscillatorWaveform::Saw => sawtooth(offset, frequency),
            OscillatorWaveform::Square => square(offset, frequency),
            OscillatorWaveform::Triangle => triangle(offset, frequency),
        }
    }
}

/// Position within the current cycle, `0.0..1.0`.
#[inline]
fn cycle_position(offset: f64, frequency: f64) -> f64 {
    let cycles = offset * frequency;
    cycles - cycles.floor()
}

pub fn sine(offset: f64, frequency: f64) -> f64 {
    (TAU * offset * frequency).sin()
}

pub fn sawtooth(offset: f64, frequency: f64) -> f64 {
    2.0 * cycle_position(offset, frequency) - 1.0
}

pub fn square(offset: f64, frequency: f64) -> f64 {
    if cycle_position(offset, frequency) < 0.5 {
        1.0
    } else {
        -1.0
    }
}

pub fn triangle(offset: f64, frequency: f64) -> f64 {
    4.0 * (cycle_position(offset, frequency) - 0.5).abs() - 1.0
}
