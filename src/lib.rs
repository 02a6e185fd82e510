pub mod dsp; // Envelope and waveform primitives
pub mod engine; // Composition root
pub mod error;
pub mod graph; // Signal sources, channels and mixers
pub mod sequencing; // Notes, patterns and step sequencers
pub mod synth; // Voices and polyphony
pub mod voices;

pub use error::{Error, Result};

/// Sequencer resolution: sixteenth notes.
pub const STEPS_PER_BEAT: f64 = 4.0;
pub(crate) const SECONDS_PER_MINUTE: f64 = 60.0;
