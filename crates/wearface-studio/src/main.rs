mod cli;
mod host;
mod sim;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use image::{Rgba, RgbaImage};

use wearface_engine::logging::{init_logging, LoggingConfig};
use wearface_engine::raster::Raster;
use wearface_engine::time::SystemClock;
use wearface_engine::{Event, FaceResources, FaceVariant, InterruptionFilter};

use crate::cli::Cli;
use crate::sim::Simulator;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(match &cli.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let variant = FaceVariant::from(cli.variant);
    let resources = load_resources(&cli, variant)?;

    let mut sim = Simulator::new()
        .size(cli.size.0, cli.size.1)
        .variant(variant)
        .low_bit_ambient(cli.low_bit)
        .duration(Duration::from_secs(cli.seconds));
    if let Some(secs) = cli.ambient_after {
        sim = sim.at(Duration::from_secs(secs), Event::AmbientModeChanged(true));
    }
    if let Some(secs) = cli.mute_after {
        sim = sim.at(
            Duration::from_secs(secs),
            Event::InterruptionFilterChanged(InterruptionFilter::NoInterruptions),
        );
    }

    log::info!(
        "running `{variant}` at {}x{} for {}s",
        cli.size.0,
        cli.size.1,
        cli.seconds
    );
    let report = sim.run(resources, SystemClock, std::thread::sleep)?;
    log::info!(
        "done: {} frames, {} ticks, {} time ticks, {} background rescales",
        report.frames,
        report.ticks,
        report.time_ticks,
        report.background_rescales
    );
    Ok(())
}

fn load_resources(cli: &Cli, variant: FaceVariant) -> Result<FaceResources> {
    let background = match &cli.background {
        Some(path) => open(path)?,
        None => placeholder("background", 1, 1, [18, 22, 28, 255])?,
    };
    let mut resources = FaceResources::new().background(background);

    // Line faces never look at the hand rasters.
    if variant == FaceVariant::Bitmap {
        let minute = match &cli.minute_hand {
            Some(path) => open(path)?,
            None => placeholder("minute_hand", 262, 8, [235, 240, 242, 255])?,
        };
        let hour = match &cli.hour_hand {
            Some(path) => open(path)?,
            None => placeholder("hour_hand", 168, 16, [235, 240, 242, 255])?,
        };
        resources = resources.minute_hand(minute).hour_hand(hour);
    }
    Ok(resources)
}

fn open(path: &Path) -> Result<Raster> {
    Raster::open(path).with_context(|| format!("loading {}", path.display()))
}

fn placeholder(name: &str, width: u32, height: u32, rgba: [u8; 4]) -> Result<Raster> {
    log::debug!("using a flat {width}x{height} placeholder for `{name}`");
    Ok(Raster::from_image(name, RgbaImage::from_pixel(width, height, Rgba(rgba)))?)
}
