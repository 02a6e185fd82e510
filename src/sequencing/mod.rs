pub mod notes;
pub mod pattern;
pub mod sequencer;

pub use notes::{Note, PitchClass};
pub use pattern::{Pattern, Step};
pub use sequencer::StepSequencer;
