#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tracing::debug;

use super::{Engine, EngineBuilder};
use crate::{
    dsp::{AttackDecay, OscillatorWaveform},
    error::Result,
    sequencing::{Pattern, StepSequencer},
    synth::{PolySynth, Voice, VoiceFactory},
};

/// Declarative description of a complete engine.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub master_gain: f64,
    pub tracks: Vec<TrackConfig>,
}

/// One instrument (a voice bank) on the master mixer, and the sequences
/// that play it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct TrackConfig {
    pub name: String,
    /// Channel gain on the master mixer.
    pub gain: f64,
    pub polyphony: usize,
    pub waveform: OscillatorWaveform,
    /// Amplitude envelope attack, seconds.
    pub attack: f64,
    /// Amplitude envelope decay, seconds.
    pub decay: f64,
    pub pitch_envelope: Option<PitchEnvelopeConfig>,
    pub sequences: Vec<SequenceConfig>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PitchEnvelopeConfig {
    pub attack: f64,
    pub decay: f64,
    /// Frequency ratio added at the envelope peak.
    pub depth: f64,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceConfig {
    pub bpm: f64,
    /// Whitespace-separated steps, e.g. `"c3 . . c3"`.
    pub pattern: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            master_gain: 0.9,
            tracks: Vec::new(),
        }
    }
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            name: String::from("track"),
            gain: 1.0,
            polyphony: 1,
            waveform: OscillatorWaveform::Saw,
            attack: 0.01,
            decay: 0.2,
            pitch_envelope: None,
            sequences: Vec::new(),
        }
    }
}

impl VoiceFactory for &TrackConfig {
    type Voice = Voice;

    fn create_voice(&self) -> Voice {
        let voice = Voice::new(self.waveform, AttackDecay::new(self.attack, self.decay));
        match &self.pitch_envelope {
            Some(pitch) => {
                voice.with_pitch_envelope(AttackDecay::new(pitch.attack, pitch.decay), pitch.depth)
            }
            None => voice,
        }
    }
}

impl Engine {
    /// Build an engine from `config`.
    ///
    /// Every pattern, tempo and polyphony is validated here; the first
    /// invalid one is returned as the error.
    pub fn from_config(config: &EngineConfig) -> Result<Engine> {
        let mut builder = EngineBuilder::new(config.master_gain);

        for track in &config.tracks {
            let synth = PolySynth::new(track, track.polyphony)?;
            let channel = builder.instrument(synth, track.gain);

            for sequence in &track.sequences {
                let pattern: Pattern = sequence.pattern.parse()?;
                builder.sequence(channel, StepSequencer::new(sequence.bpm, pattern)?);
            }
            debug!(
                track = %track.name,
                sequences = track.sequences.len(),
                "track configured"
            );
        }

        Ok(builder.build())
    }
}

/// The reference composition: a 16-voice saw pluck driven by two interlocking
/// sixteenth-note patterns at 120 bpm.
pub fn demo() -> EngineConfig {
    EngineConfig {
        master_gain: 0.9,
        tracks: vec![TrackConfig {
            name: String::from("plucks"),
            gain: 0.4,
            polyphony: 16,
            waveform: OscillatorWaveform::Saw,
            attack: 0.01,
            decay: 0.2,
            pitch_envelope: None,
            sequences: vec![
                SequenceConfig {
                    bpm: 120.0,
                    pattern: String::from(
                        "a1 a2 a3 a2 a1 a2 a3 a2 a1 a2 a3 a2 a1 a2 a3 a2",
                    ),
                },
                SequenceConfig {
                    bpm: 120.0,
                    pattern: String::from("c3 . . c3 . . g2 e2 . . e2 c1 . c3"),
                },
            ],
        }],
    }
}
