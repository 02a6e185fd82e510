// Purpose: single voices and round-robin polyphony
// This layer sits above the dsp primitives and below the engine

pub mod factory;
pub mod poly;
pub mod voice;

pub use factory::VoiceFactory;
pub use poly::{PolySynth, VOICE_GAIN};
pub use voice::{PitchModulation, Voice};
