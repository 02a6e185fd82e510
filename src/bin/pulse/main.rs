//! pulse - play an engine through the default audio device
//!
//! Run with: cargo run -- --preset groove --seconds 8

mod player;
mod presets;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use pulse_graph::engine::{Engine, EngineConfig};

#[derive(Parser)]
#[command(name = "pulse", about = "Sample-driven step sequencer synth")]
struct Cli {
    /// Composition to play
    #[arg(short, long, value_enum, default_value = "demo")]
    preset: Preset,

    /// Stop after this many seconds (plays until Ctrl+C otherwise)
    #[arg(short, long)]
    seconds: Option<f64>,

    /// Override the tempo of every sequence
    #[arg(short, long)]
    bpm: Option<f64>,

    /// Override the master gain
    #[arg(short, long)]
    master: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    Demo,
    Groove,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = configure(&cli);

    let engine = Engine::from_config(&config).wrap_err("invalid composition")?;
    player::play(engine, cli.seconds)
}

fn configure(cli: &Cli) -> EngineConfig {
    let mut config = match cli.preset {
        Preset::Demo => pulse_graph::engine::demo(),
        Preset::Groove => presets::groove(),
    };

    if let Some(master) = cli.master {
        config.master_gain = master;
    }
    if let Some(bpm) = cli.bpm {
        for sequence in config.tracks.iter_mut().flat_map(|t| t.sequences.iter_mut()) {
            sequence.bpm = bpm;
        }
    }
    config
}
