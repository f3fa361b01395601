use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width > height {
            Self::Landscape
        } else if height > width {
            Self::Portrait
        } else {
            Self::Square
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Landscape => "Landscape",
            Self::Portrait => "Portrait",
            Self::Square => "Square",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Named resolutions. Only exact pixel matches count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionClass {
    #[serde(rename = "Full HD")]
    FullHd,
    #[serde(rename = "Ultrawide FHD")]
    UltrawideFhd,
    #[serde(rename = "Custom Resolution")]
    Custom,
}

impl ResolutionClass {
    pub fn classify(width: u32, height: u32) -> Self {
        match (width, height) {
            (1920, 1080) => Self::FullHd,
            (2560, 1080) => Self::UltrawideFhd,
            _ => Self::Custom,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullHd => "Full HD",
            Self::UltrawideFhd => "Ultrawide FHD",
            Self::Custom => "Custom Resolution",
        }
    }
}

impl fmt::Display for ResolutionClass {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Width:height reduced by their greatest common divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub fn ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}:{}", self.width, self.height)
    }
}

/// Descriptive fields computed from an image's size, byte length and name.
///
/// `None` marks a value that cannot be computed for this input (zero byte size
/// or zero dimension) and is shown as "Unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetadata {
    pub name: String,
    pub file_name: String,
    pub format: String,
    pub width: u32,
    pub height: u32,
    pub total_pixels: u64,
    pub aspect_ratio: Option<AspectRatio>,
    pub megapixels: f64,
    pub orientation: Orientation,
    pub is_ultrawide: bool,
    pub resolution_class: ResolutionClass,
    /// Estimated against a nominal 27-inch diagonal, not measured.
    pub pixel_density_ppi: u32,
    pub file_size_bytes: u64,
    pub file_size: Option<String>,
    /// Uncompressed 24-bit size over actual size.
    pub compression_ratio: Option<f64>,
    pub bytes_per_pixel: Option<f64>,
    pub color_depth: String,
    pub bit_depth: String,
    pub recommended_usage: String,
}

impl DerivedMetadata {
    pub fn display_type(&self) -> &'static str {
        if self.is_ultrawide {
            "Ultrawide"
        } else {
            "Standard"
        }
    }
}
