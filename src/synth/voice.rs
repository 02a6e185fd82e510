use crate::{
    dsp::{envelope::Envelope, oscillator::Waveform, AttackDecay, OscillatorWaveform},
    graph::node::{NoteReceiver, SignalSource},
    sequencing::Note,
};

/// Envelope-driven pitch sweep.
///
/// Frequency is scaled by `1 + level × depth`, so a depth of 1.0 doubles the
/// pitch at the envelope peak. Depth is a plain ratio, not semitones.
pub struct PitchModulation<E> {
    pub envelope: E,
    pub depth: f64,
}

/// A single monophonic voice: one waveform shaped by an amplitude envelope,
/// with an optional pitch envelope.
///
/// A voice that has never received a note is silent.
pub struct Voice<W = OscillatorWaveform, E = AttackDecay> {
    waveform: W,
    amplitude: E,
    pitch: Option<PitchModulation<E>>,
    note: Option<Note>,
    /// Cached `note.frequency()`.
    frequency: f64,
    note_start: f64,
}

impl<W: Waveform, E: Envelope> Voice<W, E> {
    pub fn new(waveform: W, amplitude: E) -> Self {
        Self {
            waveform,
            amplitude,
            pitch: None,
            note: None,
            frequency: 0.0,
            note_start: 0.0,
        }
    }

    /// Sweep the pitch with `envelope`, scaled by `depth`.
    pub fn with_pitch_envelope(mut self, envelope: E, depth: f64) -> Self {
        self.pitch = Some(PitchModulation { envelope, depth });
        self
    }

    /// Currently sounding (or last) note.
    pub fn note(&self) -> Option<Note> {
        self.note
    }

    pub fn note_start(&self) -> f64 {
        self.note_start
    }

    /// Frequency at time `t`, after pitch modulation.
    pub fn frequency_at(&self, t: f64) -> f64 {
        let mut frequency = self.frequency;
        if let Some(pitch) = &self.pitch {
            frequency += frequency * pitch.envelope.value(t) * pitch.depth;
        }
        frequency
    }

    pub fn amplitude_envelope(&self) -> &E {
        &self.amplitude
    }
}

impl<W: Waveform, E: Envelope> NoteReceiver for Voice<W, E> {
    fn note_on(&mut self, t: f64, note: Note) {
        self.note = Some(note);
        self.frequency = note.frequency();
        self.note_start = t;

        self.amplitude.trigger(t);
        if let Some(pitch) = &mut self.pitch {
            pitch.envelope.trigger(t);
        }
    }
}

impl<W: Waveform, E: Envelope> SignalSource for Voice<W, E> {
    fn sample(&mut self, t: f64) -> f64 {
        if self.note.is_none() {
            return 0.0;
        }

        let level = self.amplitude.value(t);
        level * self.waveform.evaluate(t - self.note_start, self.frequency_at(t))
    }
}
