use tracing::debug;

use crate::config::GalleryConfig;
use crate::model::{GalleryEntry, RemoteFile};

const SUPPORTED_EXTENSIONS: [&str; 2] = [".jpg", ".jpeg"];

pub fn is_supported_name(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|extension| lower.ends_with(extension))
}

/// Turns the raw listing into gallery entries, in listing order.
///
/// Non-jpeg files and rows without a download URL are dropped. The full-size
/// URL is derived from the name, since the listing only points at previews.
pub fn build_entries(files: Vec<RemoteFile>, config: &GalleryConfig) -> Vec<GalleryEntry> {
    let total = files.len();
    let entries = files
        .into_iter()
        .filter(|file| is_supported_name(&file.name))
        .filter_map(|file| {
            let thumb_url = file.download_url?;
            Some(GalleryEntry {
                full_url: config.full_image_url(&file.name),
                name: file.name,
                thumb_url,
            })
        })
        .collect::<Vec<_>>();
    debug!(total, kept = entries.len(), "filtered gallery listing");
    entries
}
