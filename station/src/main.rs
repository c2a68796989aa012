//! Weather reporter host binary.
//!
//! Usage: `weather-reporter [CONFIG]`. Buttons are typed on stdin (`help`
//! lists them); frames are written to the log under the `display` target.

use std::thread;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use weather_reporter::{ConsoleInput, LogRenderer, OneCallClient, StationConfig, StationInfo, SystemClock};
use weather_reporter_common::Controller;
use weather_reporter_common::local_time::FixedZone;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = StationConfig::resolve_path(std::env::args().nth(1));
    let config = StationConfig::load(&path)?;
    if config.api_key.is_empty() {
        warn!("no API key configured; every refresh will fail until one is set");
    }

    let zone = FixedZone::east(config.utc_offset_secs)
        .with_context(|| format!("utc_offset_secs {} is not a valid offset", config.utc_offset_secs))?;
    let client = OneCallClient::new(config.latitude, config.longitude, &config.api_key, config.http_timeout())
        .context("failed to build HTTP client")?;
    let console = ConsoleInput::spawn().context("failed to start console reader")?;
    let renderer = LogRenderer::new(zone, StationInfo::from_config(&config));

    info!(
        location = %config.location_name,
        lat = config.latitude,
        lon = config.longitude,
        "weather reporter starting"
    );

    let mut controller =
        Controller::new(console, SystemClock::new(), client, zone, renderer).with_timing(config.loop_timing());
    controller.set_auto_advance(config.auto_advance);

    let delay = config.loop_delay();
    loop {
        controller.step();

        // An even number of toggles cancels out
        if controller.input_mut().take_auto_toggles() % 2 == 1 {
            let enabled = !controller.navigation().auto_advance();
            controller.set_auto_advance(enabled);
            info!(enabled, "autoplay toggled");
        }

        if controller.input_mut().quit_requested() {
            info!("quit requested");
            break;
        }

        thread::sleep(delay);
    }

    Ok(())
}
