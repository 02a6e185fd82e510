//! Real-world scenario benchmarks.
//!
//! These model actual usage: voices ringing inside a bank, and complete
//! engines with sequencers running every sample.

mod engine;
mod voices;

pub use engine::bench_engine;
pub use voices::bench_voices;
