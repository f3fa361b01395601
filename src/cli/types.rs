use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::model::Viewport;
use crate::panning::{PanningInfo, UvWindow};

/// Upper bound for `pan --ticks`; smoothing has settled long before this.
pub(super) const MAX_TICKS: u64 = 10_000;

#[derive(Debug, Parser)]
#[command(
    name = "gallery",
    version,
    about = "Wallpaper gallery viewer and command-line tools"
)]
pub(super) struct Cli {
    /// Gallery configuration file (.json, .yaml or .yml).
    #[arg(long, global = true)]
    pub(super) config: Option<PathBuf>,
    #[arg(short, long, global = true)]
    pub(super) verbose: bool,
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Prints the gallery listing as JSON.
    List {
        #[arg(long)]
        letter: Option<String>,
    },
    /// Downloads one image and prints its metadata report.
    Info {
        name: String,
    },
    /// Computes panning, offset and visible window for a pointer position.
    Pan {
        #[arg(long, value_parser = parse_size, value_name = "WxH")]
        image: (u32, u32),
        #[arg(long, value_parser = parse_size, value_name = "WxH")]
        viewport: (u32, u32),
        /// Pointer x in viewport pixels. Defaults to the viewport centre.
        #[arg(long)]
        pointer: Option<f64>,
        /// Smoothing ticks from the left edge toward the pointer; 0 uses the pointer directly.
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u64).range(0..=MAX_TICKS))]
        ticks: u64,
    },
    Download {
        name: String,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Launches the viewer window.
    View,
}

#[derive(Debug, Serialize)]
pub(super) struct PanReport {
    pub(super) image: (u32, u32),
    pub(super) viewport: Viewport,
    pub(super) panning: PanningInfo,
    pub(super) pointer: f64,
    pub(super) smoothed_x: f64,
    pub(super) offset: f64,
    pub(super) window: UvWindow,
}

pub(super) fn parse_size(raw: &str) -> Result<(u32, u32), String> {
    let (width, height) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{raw}`"))?;
    let parse = |side: &str| {
        side.trim()
            .parse::<u32>()
            .map_err(|error| format!("invalid size `{raw}`: {error}"))
    };
    Ok((parse(width)?, parse(height)?))
}
