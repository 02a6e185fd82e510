//! Composition root.
//!
//! An [`Engine`] owns the whole graph: a master mixer whose channels are
//! instruments, plus the step sequencers that drive them. It is built once,
//! then pulled one sample at a time:
//!
//! ```ignore
//! let mut engine = Engine::from_config(&engine::demo())?;
//! for frame in 0..sample_rate as u64 {
//!     let out = engine.sample(frame as f64 / sample_rate);
//! }
//! ```
//!
//! Each call first runs every sequencer against its instrument (in the order
//! they were attached), then sums the mixer. Sequencers address instruments
//! by [`ChannelId`], so several sequencers can play the same instrument.

mod config;

pub use config::{demo, EngineConfig, PitchEnvelopeConfig, SequenceConfig, TrackConfig};

use tracing::debug;

use crate::{
    graph::{ChannelId, Instrument, Mixer, SignalSource},
    sequencing::StepSequencer,
};

/// A sequencer and the instrument it plays.
struct Sequenced {
    sequencer: StepSequencer,
    target: ChannelId,
}

pub struct Engine {
    mixer: Mixer<Box<dyn Instrument>>,
    sequencers: Vec<Sequenced>,
}

impl Engine {
    pub fn builder(master_gain: f64) -> EngineBuilder {
        EngineBuilder::new(master_gain)
    }

    /// Output sample at stream time `t` (seconds).
    ///
    /// Call with non-decreasing `t`, once per output frame. The result is not
    /// clamped.
    pub fn sample(&mut self, t: f64) -> f64 {
        for Sequenced { sequencer, target } in &mut self.sequencers {
            if let Some(instrument) = self.mixer.source_mut(*target) {
                sequencer.run(t, instrument);
            }
        }
        self.mixer.sample(t)
    }
}

/// Builder for [`Engine`]. Topology is fixed once `build` is called.
pub struct EngineBuilder {
    mixer: Mixer<Box<dyn Instrument>>,
    sequencers: Vec<Sequenced>,
}

impl EngineBuilder {
    pub fn new(master_gain: f64) -> Self {
        Self {
            mixer: Mixer::new(master_gain),
            sequencers: Vec::new(),
        }
    }

    /// Add an instrument to the master mixer at `gain`.
    pub fn instrument<I>(&mut self, instrument: I, gain: f64) -> ChannelId
    where
        I: Instrument + 'static,
    {
        self.mixer.add_channel(Box::new(instrument), gain)
    }

    /// Drive the instrument on `target` with `sequencer`.
    ///
    /// # Panics
    ///
    /// If `target` was not returned by this builder.
    pub fn sequence(&mut self, target: ChannelId, sequencer: StepSequencer) -> &mut Self {
        assert!(
            self.mixer.channel(target).is_some(),
            "sequencer target {target:?} is not a channel of this engine"
        );
        self.sequencers.push(Sequenced { sequencer, target });
        self
    }

    pub fn build(self) -> Engine {
        debug!(
            instruments = self.mixer.len(),
            sequencers = self.sequencers.len(),
            master_gain = self.mixer.master_gain(),
            "engine built"
        );
        Engine {
            mixer: self.mixer,
            sequencers: self.sequencers,
        }
    }
}
