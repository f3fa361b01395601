use eframe::egui;

use crate::model::Viewport;
use crate::panning::{UvWindow, compute_offset, compute_panning, cover_window, pan_window};

use super::state::Displayed;

const SWITCHING_TINT: u8 = 110;

/// Part of the image to show for the current pointer position.
pub(crate) fn background_window(shown: &Displayed, viewport: Viewport, smoothed_x: f64) -> UvWindow {
    let panning = if shown.viewport == viewport {
        shown.panning
    } else {
        compute_panning(shown.asset.width, shown.asset.height, viewport)
    };
    if panning.is_wide && panning.rendered_width > viewport.width {
        let offset = compute_offset(smoothed_x, panning.rendered_width, viewport.width);
        pan_window(offset, panning.rendered_width, viewport.width)
    } else {
        cover_window(shown.asset.width, shown.asset.height, viewport)
    }
}

pub(crate) fn paint(
    ctx: &egui::Context,
    texture: Option<&egui::TextureHandle>,
    shown: Option<&Displayed>,
    viewport: Viewport,
    smoothed_x: f64,
    switching: bool,
) {
    let painter = ctx.layer_painter(egui::LayerId::background());
    let rect = ctx.screen_rect();
    painter.rect_filled(rect, 0.0, egui::Color32::BLACK);

    let (Some(texture), Some(shown)) = (texture, shown) else {
        return;
    };
    let window = background_window(shown, viewport, smoothed_x);
    let uv = egui::Rect::from_min_max(
        egui::pos2(window.min_x as f32, window.min_y as f32),
        egui::pos2(window.max_x as f32, window.max_y as f32),
    );
    let tint = if switching {
        egui::Color32::from_gray(SWITCHING_TINT)
    } else {
        egui::Color32::WHITE
    };
    painter.image(texture.id(), rect, uv, tint);
}
