mod app;
mod background;
mod panels;
mod state;
mod worker;

#[cfg(test)]
mod tests;

use eframe::egui;

use crate::config::GalleryConfig;
use crate::runtime::AppContext;

const WINDOW_TITLE: &str = "Wallpaper Gallery";
const DEFAULT_WINDOW_SIZE: [f32; 2] = [1280.0, 720.0];
const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 360.0];

pub fn run(config: GalleryConfig) -> Result<(), String> {
    let context = AppContext::new(config).map_err(|error| error.to_string())?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(app::GalleryApp::new(cc, context)))),
    )
    .map_err(|error| error.to_string())
}
