use pulse_graph::{
    dsp::OscillatorWaveform,
    engine::{demo, EngineConfig, PitchEnvelopeConfig, SequenceConfig, TrackConfig},
};

/// The demo plucks with a kick and a square lead on top.
pub fn groove() -> EngineConfig {
    let mut config = demo();
    config.master_gain = 0.8;

    config.tracks.push(TrackConfig {
        name: String::from("kick"),
        gain: 0.8,
        polyphony: 1,
        waveform: OscillatorWaveform::Sine,
        attack: 0.001,
        decay: 0.25,
        pitch_envelope: Some(PitchEnvelopeConfig {
            attack: 0.0,
            decay: 0.06,
            depth: 2.0,
        }),
        sequences: vec![SequenceConfig {
            bpm: 120.0,
            pattern: String::from("a1 . . . a1 . . . a1 . . . a1 . a1 ."),
        }],
    });

    config.tracks.push(TrackConfig {
        name: String::from("lead"),
        gain: 0.25,
        polyphony: 4,
        waveform: OscillatorWaveform::Square,
        attack: 0.02,
        decay: 0.4,
        pitch_envelope: None,
        sequences: vec![SequenceConfig {
            bpm: 120.0,
            pattern: String::from(
                "e4 . . . g4 . . . a4 . . . g4 . e4 . \
                 d4 . . . e4 . . . c4 . . . . . . .",
            ),
        }],
    });

    config
}
