use crate::graph::{mix::Channel, node::SignalSource};

pub trait SourceExt: SignalSource + Sized {
    /// Wrap this source in a channel at `gain`.
    fn into_channel(self, gain: f64) -> Channel<Self> {
        Channel::new(self, gain)
    }
}

impl<T: SignalSource> SourceExt for T {}
