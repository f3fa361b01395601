use std::sync::Arc;

use tracing::{info, warn};

use crate::config::GalleryConfig;
use crate::gallery::build_entries;
use crate::model::GalleryEntry;
use crate::source::GallerySource;

use super::{AppError, Result};

#[derive(Clone)]
pub struct GalleryService {
    config: GalleryConfig,
    source: Arc<dyn GallerySource>,
}

impl GalleryService {
    pub fn new(config: GalleryConfig, source: Arc<dyn GallerySource>) -> Self {
        Self { config, source }
    }

    pub fn list(&self) -> Result<Vec<GalleryEntry>> {
        let files = self.source.list_files()?;
        let entries = build_entries(files, &self.config);
        info!(count = entries.len(), "gallery listing loaded");
        Ok(entries)
    }

    /// Listing for the viewer: a failed fetch yields an empty gallery.
    pub fn entries_or_empty(&self) -> Vec<GalleryEntry> {
        self.list().unwrap_or_else(|error| {
            warn!(%error, "gallery listing unavailable");
            Vec::new()
        })
    }

    pub fn find(&self, name: &str) -> Result<GalleryEntry> {
        self.list()?
            .into_iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::NotFound(name.to_string()))
    }

    pub fn fetch_thumbnail(&self, entry: &GalleryEntry) -> Result<Vec<u8>> {
        Ok(self.source.fetch_bytes(&entry.thumb_url)?)
    }

    pub fn default_entry<'a>(&self, entries: &'a [GalleryEntry]) -> Option<&'a GalleryEntry> {
        self.config.default_selection.resolve(entries)
    }
}
