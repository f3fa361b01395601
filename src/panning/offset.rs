use serde::{Deserialize, Serialize};

use crate::model::Viewport;

/// Normalized texture coordinates of the visible part of an image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvWindow {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl UvWindow {
    pub const FULL: Self = Self {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 1.0,
        max_y: 1.0,
    };

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }
}

/// Maps a smoothed pointer x to the background's horizontal offset in pixels.
///
/// The result lies in `[-(rendered_width - viewport_width), 0]`.
pub fn compute_offset(smoothed_x: f64, rendered_width: f64, viewport_width: f64) -> f64 {
    if !(viewport_width > 0.0) || smoothed_x.is_nan() {
        return 0.0;
    }
    let normalized_x = (smoothed_x / viewport_width).clamp(0.0, 1.0);
    let overflow = (rendered_width - viewport_width).max(0.0);
    -overflow * normalized_x
}

/// Visible window of a wide image scaled to `rendered_width` and shifted by `offset`.
pub fn pan_window(offset: f64, rendered_width: f64, viewport_width: f64) -> UvWindow {
    if !(rendered_width > 0.0) || rendered_width <= viewport_width {
        return UvWindow::FULL;
    }
    let min_x = (-offset / rendered_width).clamp(0.0, 1.0);
    let max_x = (min_x + viewport_width / rendered_width).min(1.0);
    UvWindow {
        min_x,
        min_y: 0.0,
        max_x,
        max_y: 1.0,
    }
}

/// Centred crop that fills the viewport while keeping the image's aspect ratio.
pub fn cover_window(image_width: u32, image_height: u32, viewport: Viewport) -> UvWindow {
    if image_width == 0 || image_height == 0 {
        return UvWindow::FULL;
    }
    let image_w = f64::from(image_width);
    let image_h = f64::from(image_height);
    let scale = (viewport.width / image_w).max(viewport.height / image_h);
    let visible_w = (viewport.width / (image_w * scale)).min(1.0);
    let visible_h = (viewport.height / (image_h * scale)).min(1.0);
    let min_x = (1.0 - visible_w) * 0.5;
    let min_y = (1.0 - visible_h) * 0.5;
    UvWindow {
        min_x,
        min_y,
        max_x: min_x + visible_w,
        max_y: min_y + visible_h,
    }
}
