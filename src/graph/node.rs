use crate::sequencing::Note;

/// Core trait for everything that produces audio.
///
/// Sources are pulled once per output sample with the absolute stream time
/// in seconds. Voices, voice banks, channels and mixers all implement it.
pub trait SignalSource: Send {
    fn sample(&mut self, t: f64) -> f64;
}

/// Anything a step sequencer can play.
pub trait NoteReceiver {
    /// Start `note` at time `t`.
    fn note_on(&mut self, t: f64, note: Note);
}

/// A playable sound source: receives notes and produces audio.
///
/// Blanket-implemented, so any `SignalSource + NoteReceiver` qualifies.
pub trait Instrument: SignalSource + NoteReceiver {}

impl<T: SignalSource + NoteReceiver> Instrument for T {}

/// Allow boxed sources to be used as sources (for dynamic dispatch)
impl<S: SignalSource + ?Sized> SignalSource for Box<S> {
    fn sample(&mut self, t: f64) -> f64 {
        (**self).sample(t)
    }
}

impl<R: NoteReceiver + ?Sized> NoteReceiver for Box<R> {
    fn note_on(&mut self, t: f64, note: Note) {
        (**self).note_on(t, note)
    }
}

impl<R: NoteReceiver + ?Sized> NoteReceiver for &mut R {
    fn note_on(&mut self, t: f64, note: Note) {
        (**self).note_on(t, note)
    }
}
