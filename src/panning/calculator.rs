use serde::{Deserialize, Serialize};

use crate::model::Viewport;

/// An image pans only when it is this much wider (relative to its height) than
/// the viewport, so near-equal aspect ratios do not flip between modes.
pub const WIDE_MARGIN: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanningInfo {
    pub is_wide: bool,
    /// Width of the image once scaled to the viewport height. Never below the viewport width.
    pub rendered_width: f64,
}

impl PanningInfo {
    pub fn cover(viewport: Viewport) -> Self {
        Self {
            is_wide: false,
            rendered_width: viewport.width,
        }
    }

    /// Horizontal distance the background can travel.
    pub fn overflow(&self, viewport_width: f64) -> f64 {
        (self.rendered_width - viewport_width).max(0.0)
    }
}

pub fn compute_panning(image_width: u32, image_height: u32, viewport: Viewport) -> PanningInfo {
    if image_width == 0 || image_height == 0 {
        return PanningInfo::cover(viewport);
    }

    let image_w = f64::from(image_width);
    let image_h = f64::from(image_height);
    let image_aspect = image_w / image_h;
    let is_wide = image_aspect > viewport.aspect() * WIDE_MARGIN;
    if !is_wide {
        return PanningInfo::cover(viewport);
    }

    PanningInfo {
        is_wide,
        rendered_width: (image_w * (viewport.height / image_h)).max(viewport.width),
    }
}
