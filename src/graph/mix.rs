use tracing::debug;

use crate::graph::node::SignalSource;

/*
Channels and Mixing
===================

A Channel scales one source by a fixed gain. A Mixer owns a list of channels
and sums them, then scales the sum by a master gain:

    out(t) = master × Σ gain_i × source_i(t)

An empty mixer is silent.

Topology is fixed once built: channels are only ever appended, never removed
or reordered. Order has no audible effect, it only decides the order of the
floating-point additions.

Nothing is clamped here. Several loud channels can push the sum past ±1.0;
clipping is the output stage's decision.

Ownership
---------

The mixer owns its sources. Anything that needs to reach a source after it
was added (a sequencer sending notes to an instrument, say) keeps the
ChannelId returned by `add_channel` and borrows the source through
`source_mut`.

Example usage:
  let mut mixer = Mixer::new(0.9);
  let lead = mixer.add_channel(lead_voice, 0.5);
  let bass = mixer.add_channel(bass_voice, 0.3);

  mixer.source_mut(lead).unwrap().note_on(t, note);
  let out = mixer.sample(t);
*/

/// Stable handle to a channel in a [`Mixer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(usize);

impl ChannelId {
    pub fn index(self) -> usize {
        self.0
    }
}

pub struct Channel<S> {
    source: S,
    gain: f64,
}

impl<S> Channel<S> {
    pub fn new(source: S, gain: f64) -> Self {
        Self { source, gain }
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S: SignalSource> SignalSource for Channel<S> {
    fn sample(&mut self, t: f64) -> f64 {
        self.gain * self.source.sample(t)
    }
}

pub struct Mixer<S> {
    channels: Vec<Channel<S>>,
    master_gain: f64,
}

impl<S> Mixer<S> {
    pub fn new(master_gain: f64) -> Self {
        Self {
            channels: Vec::new(),
            master_gain,
        }
    }

    /// Append `source` as a new channel at `gain`.
    pub fn add_channel(&mut self, source: S, gain: f64) -> ChannelId {
        self.push(Channel::new(source, gain))
    }

    /// Append an already-built channel.
    pub fn push(&mut self, channel: Channel<S>) -> ChannelId {
        let id = ChannelId(self.channels.len());
        debug!(channel = id.0, gain = channel.gain, "mixer channel added");
        self.channels.push(channel);
        id
    }

    pub fn master_gain(&self) -> f64 {
        self.master_gain
    }

    pub fn channel(&self, id: ChannelId) -> Option<&Channel<S>> {
        self.channels.get(id.0)
    }

    pub fn source_mut(&mut self, id: ChannelId) -> Option<&mut S> {
        self.channels.get_mut(id.0).map(Channel::source_mut)
    }

    pub fn channels(&self) -> impl Iterator<Item = &Channel<S>> {
        self.channels.iter()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl<S: SignalSource> SignalSource for Mixer<S> {
    fn sample(&mut self, t: f64) -> f64 {
        let sum: f64 = self.channels.iter_mut().map(|c| c.sample(t)).sum();
        sum * self.master_gain
    }
}
