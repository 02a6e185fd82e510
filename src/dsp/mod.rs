//! Low-level signal primitives used by voices.
//!
//! Both primitives are closed-form functions of time: an envelope keeps only
//! its trigger time and a waveform keeps nothing. Voices can therefore be
//! evaluated at any t without advancing hidden per-sample state.

/// Attack/decay envelope generator.
pub mod envelope;
/// Oscillator waveforms.
pub mod oscillator;

pub use envelope::{AttackDecay, Envelope};
pub use oscillator::{OscillatorWaveform, Waveform};
