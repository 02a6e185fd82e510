use crate::graph::node::Instrument;

/// Builds the voices of a [`PolySynth`](super::poly::PolySynth).
///
/// The bank calls `create_voice` once per slot at construction, so every
/// voice starts from the same recipe and owns its own envelope state. Plain
/// functions and closures returning an instrument are factories, as are
/// track configs (`&TrackConfig`).
pub trait VoiceFactory {
    type Voice: Instrument;

    fn create_voice(&self) -> Self::Voice;
}

impl<F, V> VoiceFactory for F
where
    F: Fn() -> V,
    V: Instrument,
{
    type Voice = V;

    fn create_voice(&self) -> V {
        self()
    }
}
