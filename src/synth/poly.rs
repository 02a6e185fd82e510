use tracing::debug;

use crate::{
    error::{Error, Result},
    graph::{
        mix::{Channel, ChannelId, Mixer},
        node::{Instrument, NoteReceiver, SignalSource},
    },
    sequencing::Note,
    synth::factory::VoiceFactory,
};

/// Per-voice gain inside the bank. Keeps a few overlapping voices from
/// clipping.
pub const VOICE_GAIN: f64 = 0.7;

/// Round-robin polyphony over a fixed pool of voices.
///
/// Every note-on goes to the next voice in turn, whether or not that voice
/// is still sounding. With notes arriving faster than they decay, the oldest
/// note is cut off: voice stealing by rotation, not by availability.
pub struct PolySynth<V> {
    mixer: Mixer<V>,
    voices: Vec<ChannelId>,
    cursor: usize,
}

impl<V: Instrument> PolySynth<V> {
    pub fn new<F>(factory: F, polyphony: usize) -> Result<Self>
    where
        F: VoiceFactory<Voice = V>,
    {
        if polyphony == 0 {
            return Err(Error::ZeroPolyphony);
        }

        let mut mixer = Mixer::new(1.0);
        let voices = (0..polyphony)
            .map(|_| mixer.add_channel(factory.create_voice(), VOICE_GAIN))
            .collect();

        debug!(polyphony, "voice bank created");
        Ok(Self {
            mixer,
            voices,
            cursor: 0,
        })
    }
}

impl<V> PolySynth<V> {
    pub fn polyphony(&self) -> usize {
        self.voices.len()
    }

    /// Index of the voice that receives the next note.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn voices(&self) -> impl Iterator<Item = &V> {
        self.mixer.channels().map(Channel::source)
    }
}

impl<V: Instrument> NoteReceiver for PolySynth<V> {
    fn note_on(&mut self, t: f64, note: Note) {
        if let Some(voice) = self.mixer.source_mut(self.voices[self.cursor]) {
            voice.note_on(t, note);
        }
        self.cursor = (self.cursor + 1) % self.voices.len();
    }
}

impl<V: Instrument> SignalSource for PolySynth<V> {
    fn sample(&mut self, t: f64) -> f64 {
        self.mixer.sample(t)
    }
}
