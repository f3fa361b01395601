use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::model::GalleryEntry;
use crate::source::GallerySource;

use super::Result;

#[derive(Clone)]
pub struct DownloadService {
    source: Arc<dyn GallerySource>,
}

impl DownloadService {
    pub fn new(source: Arc<dyn GallerySource>) -> Self {
        Self { source }
    }

    /// Where `entry` lands for a given destination. A directory receives the original file name.
    pub fn target_path(&self, entry: &GalleryEntry, destination: Option<&Path>) -> PathBuf {
        match destination {
            Some(path) if path.is_dir() => path.join(&entry.name),
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(&entry.name),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "saved wallpaper");
        Ok(())
    }

    pub fn download(&self, entry: &GalleryEntry, destination: Option<&Path>) -> Result<PathBuf> {
        let bytes = self.source.fetch_bytes(&entry.full_url)?;
        let path = self.target_path(entry, destination);
        self.save(&path, &bytes)?;
        Ok(path)
    }
}
