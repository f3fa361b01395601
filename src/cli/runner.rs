use clap::Parser;
use serde_json::json;
use tracing::debug;

use crate::config::load_or_default;
use crate::gallery::{filter_by_letter, parse_letter};
use crate::logging;
use crate::model::Viewport;
use crate::panning::{
    PointerTracker, SmoothingLoop, compute_offset, compute_panning, cover_window, pan_window,
};
use crate::runtime::AppContext;

use super::types::{Cli, Commands, MAX_TICKS, PanReport};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = load_or_default(cli.config.as_deref()).map_err(|error| error.to_string())?;

    match cli.command {
        Commands::List { letter } => {
            let letter = letter
                .as_deref()
                .map(parse_letter)
                .transpose()
                .map_err(|error| error.to_string())?;
            let app = AppContext::new(config).map_err(|error| error.to_string())?;
            let entries = app
                .gallery_service()
                .list()
                .map_err(|error| error.to_string())?;
            let visible = filter_by_letter(&entries, letter);
            println!(
                "{}",
                serde_json::to_string_pretty(&visible).map_err(|error| error.to_string())?
            );
        }
        Commands::Info { name } => {
            let app = AppContext::new(config).map_err(|error| error.to_string())?;
            let entry = app
                .gallery_service()
                .find(&name)
                .map_err(|error| error.to_string())?;
            let report = app
                .metadata_service()
                .report(&entry)
                .map_err(|error| error.to_string())?;
            println!(
                "{}",
                serde_json::to_string_pretty(&report).map_err(|error| error.to_string())?
            );
        }
        Commands::Pan {
            image,
            viewport,
            pointer,
            ticks,
        } => {
            let report = pan_report(image, viewport, pointer, ticks)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&report).map_err(|error| error.to_string())?
            );
        }
        Commands::Download { name, output } => {
            let app = AppContext::new(config).map_err(|error| error.to_string())?;
            let entry = app
                .gallery_service()
                .find(&name)
                .map_err(|error| error.to_string())?;
            let path = app
                .download_service()
                .download(&entry, output.as_deref())
                .map_err(|error| error.to_string())?;
            println!("{}", json!({"status": "ok", "output": path}));
        }
        Commands::View => {
            crate::ui::run(config)?;
        }
    }

    Ok(())
}

pub(super) fn pan_report(
    image: (u32, u32),
    viewport: (u32, u32),
    pointer: Option<f64>,
    ticks: u64,
) -> Result<PanReport, String> {
    let ticks = usize::try_from(ticks.min(MAX_TICKS)).map_err(|error| error.to_string())?;
    let viewport = Viewport::new(f64::from(viewport.0), f64::from(viewport.1))
        .map_err(|error| error.to_string())?;
    let pointer = pointer.unwrap_or(viewport.width / 2.0);
    let panning = compute_panning(image.0, image.1, viewport);

    let smoothed_x = if ticks == 0 {
        pointer
    } else {
        let mut smoothing = SmoothingLoop::start(PointerTracker::new(0.0));
        smoothing.set_raw(pointer);
        smoothing.by_ref().take(ticks).last().unwrap_or(0.0)
    };
    debug!(pointer, smoothed_x, ticks, "pan position");

    let (offset, window) = if panning.is_wide {
        let offset = compute_offset(smoothed_x, panning.rendered_width, viewport.width);
        (offset, pan_window(offset, panning.rendered_width, viewport.width))
    } else {
        (0.0, cover_window(image.0, image.1, viewport))
    };

    Ok(PanReport {
        image,
        viewport,
        panning,
        pointer,
        smoothed_x,
        offset,
        window,
    })
}
