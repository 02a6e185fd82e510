//! Bass voice.
//!
//! A round bass from a triangle wave. Triangle harmonics fall off quickly,
//! so the low end stays clean without any filtering.

use crate::{
    dsp::{AttackDecay, OscillatorWaveform},
    synth::Voice,
};

/// Create a bass voice.
pub fn bass() -> Voice {
    Voice::new(OscillatorWaveform::Triangle, AttackDecay::new(0.005, 0.3))
}
