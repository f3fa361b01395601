use serde::{Deserialize, Serialize};

use super::{CoreError, Result};

/// Size of the display surface in logical pixels. Read fresh for every computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let viewport = Self { width, height };
        viewport.validate()?;
        Ok(viewport)
    }

    pub fn validate(&self) -> Result<()> {
        let valid = |side: f64| side.is_finite() && side > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(CoreError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}
