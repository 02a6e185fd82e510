//! Kick drum voice.
//!
//! A synthesized kick using a sine wave with a pitch envelope. The pitch
//! starts at three times the note frequency and sweeps down to it within
//! 60ms, which gives the kick its "punch".
//!
//! # How It Works
//!
//! 1. Sine oscillator provides the body (pure, deep tone)
//! 2. Pitch envelope: instant jump, 60ms fall, depth 2.0 (3x at the peak)
//! 3. Amplitude envelope with instant attack, quick decay
//!
//! Play it low: `a1` or `c1` gives a classic 50-65Hz kick.
//!
//! # Variations
//!
//! - Longer decay = boomy 808-style kick
//! - Higher depth = more "click" attack

use crate::{
    dsp::{AttackDecay, OscillatorWaveform},
    synth::Voice,
};

/// Create a kick drum voice.
pub fn kick() -> Voice {
    Voice::new(OscillatorWaveform::Sine, AttackDecay::new(0.001, 0.25))
        .with_pitch_envelope(AttackDecay::new(0.0, 0.06), 2.0)
}
