//! The mixing graph.
//!
//! Everything that makes sound implements [`SignalSource`]. Channels and
//! mixers are sources too, so graphs nest: a voice bank is a mixer of voices,
//! and the engine's master bus is a mixer of instruments.

/// Fluent helpers (`.into_channel()`).
pub mod extensions;
/// Gain stages and summing mixers.
pub mod mix;
/// Core traits shared by all sources.
pub mod node;

pub use extensions::SourceExt;
pub use mix::{Channel, ChannelId, Mixer};
pub use node::{Instrument, NoteReceiver, SignalSource};
