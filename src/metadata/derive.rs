use crate::model::ImageAsset;

use super::format::{format_file_size, round_to};
use super::{AspectRatio, DerivedMetadata, Orientation, ResolutionClass, ULTRAWIDE_TAG};

/// Screen diagonal assumed by the pixel density estimate.
pub const NOMINAL_DIAGONAL_INCHES: f64 = 27.0;
/// Uncompressed baseline for the compression estimate (24-bit colour).
const BYTES_PER_PIXEL_UNCOMPRESSED: f64 = 3.0;
const ULTRAWIDE_MIN_RATIO: f64 = 2.0;

const COLOR_DEPTH: &str = "16.7M (24-bit)";
const BIT_DEPTH: &str = "8-bit per channel";
const ULTRAWIDE_USAGE: &str =
    "Perfect for ultrawide monitors (21:9). Ideal for immersive gaming and productivity.";
const STANDARD_USAGE: &str = "Standard Full HD quality. Great for most displays and fast loading.";

pub fn reduce_aspect(width: u32, height: u32) -> Option<AspectRatio> {
    if width == 0 || height == 0 {
        return None;
    }
    let divisor = gcd(width, height);
    Some(AspectRatio {
        width: width / divisor,
        height: height / divisor,
    })
}

pub fn derive_metadata(asset: &ImageAsset) -> DerivedMetadata {
    let width = asset.width;
    let height = asset.height;
    let total_pixels = asset.pixel_count();
    let aspect_ratio = reduce_aspect(width, height);

    let named_ultrawide = asset.name.to_lowercase().contains(ULTRAWIDE_TAG);
    let is_ultrawide = named_ultrawide
        || aspect_ratio.is_some_and(|aspect| aspect.ratio() >= ULTRAWIDE_MIN_RATIO);

    let diagonal = (f64::from(width).powi(2) + f64::from(height).powi(2)).sqrt();
    let pixel_density_ppi = (diagonal / NOMINAL_DIAGONAL_INCHES).round() as u32;

    let byte_size = asset.byte_size;
    let (compression_ratio, bytes_per_pixel) = if byte_size == 0 || total_pixels == 0 {
        (None, None)
    } else {
        let pixels = total_pixels as f64;
        let bytes = byte_size as f64;
        (
            Some(pixels * BYTES_PER_PIXEL_UNCOMPRESSED / bytes),
            Some(bytes / pixels),
        )
    };

    DerivedMetadata {
        name: asset.stem().to_string(),
        file_name: asset.name.clone(),
        format: asset
            .extension()
            .map(str::to_uppercase)
            .unwrap_or_else(|| "Unknown".to_string()),
        width,
        height,
        total_pixels,
        aspect_ratio,
        megapixels: round_to(total_pixels as f64 / 1_000_000.0, 2),
        orientation: Orientation::from_dimensions(width, height),
        is_ultrawide,
        resolution_class: ResolutionClass::classify(width, height),
        pixel_density_ppi,
        file_size_bytes: byte_size,
        file_size: (byte_size > 0).then(|| format_file_size(byte_size)),
        compression_ratio,
        bytes_per_pixel,
        color_depth: COLOR_DEPTH.to_string(),
        bit_depth: BIT_DEPTH.to_string(),
        recommended_usage: if is_ultrawide {
            ULTRAWIDE_USAGE
        } else {
            STANDARD_USAGE
        }
        .to_string(),
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
