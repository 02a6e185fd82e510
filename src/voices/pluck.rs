//! Pluck voice - percussive, quickly-decaying note.
//!
//! The default sound of the engine: a bright saw with a near-instant attack
//! and a short linear fade. Works for basslines and arpeggios alike, and
//! overlapping notes from a voice bank blur into a soft pad.
//!
//! # How It Works
//!
//! 1. Sawtooth for the full harmonic series
//! 2. 10ms attack, enough to avoid a click at note start
//! 3. 200ms decay back to silence, no sustain
//!
//! # Variations
//!
//! - Shorter decay (50-80ms) = staccato, more percussive
//! - Triangle wave = softer, bell-like
//! - Longer attack = bowed/swelling notes

use crate::{
    dsp::{AttackDecay, OscillatorWaveform},
    synth::Voice,
};

/// Create a pluck voice.
pub fn pluck() -> Voice {
    Voice::new(OscillatorWaveform::Saw, AttackDecay::new(0.01, 0.2))
}
