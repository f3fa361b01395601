use std::io::Cursor;
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::metadata::{ContributionIssue, DerivedMetadata, check_contribution, derive_metadata};
use crate::model::{GalleryEntry, ImageAsset};
use crate::source::{CommitInfo, GallerySource};

use super::Result;

/// An image's size information plus the bytes it was read from.
#[derive(Debug, Clone)]
pub struct LoadedAsset {
    pub asset: ImageAsset,
    pub bytes: Arc<Vec<u8>>,
}

/// Everything the metadata panel shows. Each part is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetadataReport {
    pub metadata: Option<DerivedMetadata>,
    pub contribution: Option<CommitInfo>,
    pub issues: Vec<ContributionIssue>,
}

impl MetadataReport {
    pub fn for_asset(asset: &ImageAsset, contribution: Option<CommitInfo>) -> Self {
        Self {
            metadata: Some(derive_metadata(asset)),
            contribution,
            issues: check_contribution(asset),
        }
    }
}

/// Reads width and height from encoded bytes without decoding pixels.
pub fn probe_asset(name: &str, bytes: &[u8]) -> Result<ImageAsset> {
    let (width, height) = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;
    Ok(ImageAsset::new(name, width, height, bytes.len() as u64)?)
}

#[derive(Clone)]
pub struct MetadataService {
    source: Arc<dyn GallerySource>,
}

impl MetadataService {
    pub fn new(source: Arc<dyn GallerySource>) -> Self {
        Self { source }
    }

    pub fn fetch_image(&self, entry: &GalleryEntry) -> Result<Arc<Vec<u8>>> {
        Ok(Arc::new(self.source.fetch_bytes(&entry.full_url)?))
    }

    pub fn load_asset(&self, entry: &GalleryEntry) -> Result<LoadedAsset> {
        let bytes = self.fetch_image(entry)?;
        let asset = probe_asset(&entry.name, &bytes)?;
        Ok(LoadedAsset { asset, bytes })
    }

    /// Latest commit for the image. Lookup failures only hide the contributor card.
    pub fn contribution(&self, name: &str) -> Option<CommitInfo> {
        match self.source.latest_commit(name) {
            Ok(info) => info,
            Err(error) => {
                warn!(name, %error, "commit history unavailable");
                None
            }
        }
    }

    /// Contributor avatar bytes. A missing URL or failed fetch shows no picture.
    pub fn fetch_avatar(&self, info: &CommitInfo) -> Option<Vec<u8>> {
        if info.avatar_url.is_empty() {
            return None;
        }
        match self.source.fetch_bytes(&info.avatar_url) {
            Ok(bytes) => Some(bytes),
            Err(error) => {
                warn!(author = %info.author, %error, "avatar unavailable");
                None
            }
        }
    }

    pub fn report(&self, entry: &GalleryEntry) -> Result<MetadataReport> {
        let loaded = self.load_asset(entry)?;
        let contribution = self.contribution(&entry.name);
        Ok(MetadataReport::for_asset(&loaded.asset, contribution))
    }
}
