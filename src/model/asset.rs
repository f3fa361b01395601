use serde::{Deserialize, Serialize};

use super::{CoreError, Result};

/// Anything listed in the gallery by file name.
pub trait Named {
    fn name(&self) -> &str;
}

/// One row of the remote contents listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFile {
    pub name: String,
    /// Absent for directories in the contents API.
    #[serde(default)]
    pub download_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub name: String,
    pub thumb_url: String,
    pub full_url: String,
}

impl GalleryEntry {
    /// File name without its extension, as shown under a thumbnail.
    pub fn label(&self) -> &str {
        file_stem(&self.name)
    }
}

impl Named for GalleryEntry {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A decoded image: natural pixel size plus the byte length of its source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub byte_size: u64,
}

impl ImageAsset {
    pub fn new(name: impl Into<String>, width: u32, height: u32, byte_size: u64) -> Result<Self> {
        let asset = Self {
            name: name.into(),
            width,
            height,
            byte_size,
        };
        asset.validate()?;
        Ok(asset)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::ZeroDimension {
                name: self.name.clone(),
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn stem(&self) -> &str {
        file_stem(&self.name)
    }

    pub fn extension(&self) -> Option<&str> {
        let (stem, extension) = self.name.rsplit_once('.')?;
        if stem.is_empty() || extension.is_empty() {
            return None;
        }
        Some(extension)
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl Named for ImageAsset {
    fn name(&self) -> &str {
        &self.name
    }
}

fn file_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}
