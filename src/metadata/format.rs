use super::DerivedMetadata;

pub const UNKNOWN: &str = "Unknown";

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

/// `1.50 MB` from one mebibyte up, otherwise `512.00 KB`.
pub fn format_file_size(bytes: u64) -> String {
    let bytes = bytes as f64;
    let megabytes = round_to(bytes / MIB, 2);
    if megabytes >= 1.0 {
        format!("{megabytes:.2} MB")
    } else {
        format!("{:.2} KB", bytes / KIB)
    }
}

pub fn format_megapixels(megapixels: f64) -> String {
    format!("{megapixels:.2} MP")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

impl DerivedMetadata {
    pub fn aspect_label(&self) -> String {
        self.aspect_ratio
            .map(|aspect| aspect.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn file_size_label(&self) -> String {
        self.file_size.clone().unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn pixel_density_label(&self) -> String {
        format!("~{} PPI", self.pixel_density_ppi)
    }

    pub fn compression_label(&self) -> String {
        match self.compression_ratio {
            Some(ratio) => format!("~{ratio:.1}:1"),
            None => UNKNOWN.to_string(),
        }
    }

    pub fn bytes_per_pixel_label(&self) -> String {
        match self.bytes_per_pixel {
            Some(value) => format!("~{value:.2}"),
            None => UNKNOWN.to_string(),
        }
    }

    /// Label/value pairs in panel order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("File Name", self.name.clone()),
            ("Dimensions", format!("{} × {}", self.width, self.height)),
            ("Aspect Ratio", self.aspect_label()),
            ("Megapixels", format_megapixels(self.megapixels)),
            ("Orientation", self.orientation.to_string()),
            ("Resolution", self.resolution_class.to_string()),
            ("Display Type", self.display_type().to_string()),
            ("File Size", self.file_size_label()),
            ("Format", self.format.clone()),
            ("Pixel Density", self.pixel_density_label()),
            ("Color Depth", self.color_depth.clone()),
            ("Bit Depth", self.bit_depth.clone()),
            ("Pixels", group_thousands(self.total_pixels)),
            ("Bytes/Pixel", self.bytes_per_pixel_label()),
            ("Compression", self.compression_label()),
        ]
    }
}
