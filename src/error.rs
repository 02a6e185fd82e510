use thiserror::Error;

/// Construction-time failures.
///
/// Everything that can go wrong is caught while building notes, patterns,
/// sequencers and voice banks. Once an [`Engine`](crate::engine::Engine)
/// exists, sampling it cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The note's pitch class is not one of `a..g` with an optional accidental.
    #[error("unknown pitch class `{0}`")]
    UnknownPitchClass(String),
    /// The note text has no octave, or the octave is not an integer in
    /// [`OCTAVES`](crate::sequencing::notes::OCTAVES).
    #[error("malformed note `{0}`: expected a pitch class followed by an octave, e.g. `a4` or `c#3`")]
    MalformedNote(String),
    /// A step pattern needs at least one step.
    #[error("pattern must contain at least one step")]
    EmptyPattern,
    /// A voice bank needs at least one voice.
    #[error("polyphony must be at least 1")]
    ZeroPolyphony,
    /// Tempo must be a positive, finite number of beats per minute.
    #[error("invalid tempo {0} bpm")]
    InvalidTempo(f64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
