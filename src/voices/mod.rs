//! Pre-built voices for common sounds.
//!
//! Each function returns a ready-to-play [`Voice`](crate::synth::Voice).
//! They are plain functions, so they double as voice factories:
//!
//! ```ignore
//! use pulse_graph::{synth::PolySynth, voices};
//!
//! let plucks = PolySynth::new(voices::pluck, 16)?;
//! let kick = voices::kick();
//! ```

mod bass;
mod kick;
mod lead;
mod pluck;

pub use bass::bass;
pub use kick::kick;
pub use lead::lead;
pub use pluck::pluck;
