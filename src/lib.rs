pub mod cli;
pub mod config;
pub mod gallery;
pub mod logging;
pub mod metadata;
pub mod model;
pub mod panning;
pub mod runtime;
pub mod source;
pub mod ui;

use config::GalleryConfig;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}

/// Opens the viewer with the built-in gallery configuration.
pub fn run_default_viewer() -> Result<(), String> {
    logging::init(false);
    ui::run(GalleryConfig::default())
}
