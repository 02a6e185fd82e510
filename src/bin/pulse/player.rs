//! Audio device driver: pulls the engine once per frame.

use std::time::Duration;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use tracing::{error, info};

use pulse_graph::engine::Engine;

/// Play `engine` on the default output device for `seconds`, or forever.
pub fn play(mut engine: Engine, seconds: Option<f64>) -> EyreResult<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = config.sample_rate().0 as f64;
    let channels = config.channels() as usize;
    info!(sample_rate, channels, "opening output stream");

    let mut frame: u64 = 0;
    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _| {
            // Mono engine output copied to every channel
            for out in data.chunks_mut(channels) {
                let t = frame as f64 / sample_rate;
                let s = engine.sample(t) as f32;
                out.fill(s);
                frame += 1;
            }
        },
        |err| error!(%err, "audio stream error"),
        None,
    )?;

    stream.play()?;

    match seconds {
        Some(seconds) => {
            info!(seconds, "playing");
            std::thread::sleep(Duration::from_secs_f64(seconds.max(0.0)));
            Ok(())
        }
        None => {
            info!("playing, press Ctrl+C to stop");
            loop {
                std::thread::sleep(Duration::from_millis(100));
            }
        }
    }
}
