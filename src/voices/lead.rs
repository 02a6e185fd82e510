//! Lead voice.
//!
//! A hollow, cutting lead using a square wave. Square waves only contain
//! odd harmonics, so the lead sits apart from saw-based plucks in a mix.
//!
//! # How It Works
//!
//! 1. Square oscillator for a reedy, clarinet-like tone
//! 2. Soft 20ms attack
//! 3. Long 400ms decay so notes sing across a few steps

use crate::{
    dsp::{AttackDecay, OscillatorWaveform},
    synth::Voice,
};

/// Create a lead voice.
pub fn lead() -> Voice {
    Voice::new(OscillatorWaveform::Square, AttackDecay::new(0.02, 0.4))
}
