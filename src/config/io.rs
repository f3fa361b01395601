use std::fs;
use std::path::Path;

use tracing::debug;

use super::{GalleryConfig, Result};

fn is_yaml(path: &Path) -> bool {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    matches!(extension.as_str(), "yaml" | "yml")
}

pub fn load_config(path: impl AsRef<Path>) -> Result<GalleryConfig> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let config = if is_yaml(path) {
        serde_yaml::from_str::<GalleryConfig>(&raw)?
    } else {
        serde_json::from_str::<GalleryConfig>(&raw)?
    };
    config.validate()?;
    debug!(path = %path.display(), "loaded gallery configuration");
    Ok(config)
}

pub fn load_or_default(path: Option<&Path>) -> Result<GalleryConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(GalleryConfig::default()),
    }
}

pub fn save_config(path: impl AsRef<Path>, config: &GalleryConfig) -> Result<()> {
    let path = path.as_ref();
    let serialized = if is_yaml(path) {
        serde_yaml::to_string(config)?
    } else {
        serde_json::to_string_pretty(config)?
    };
    fs::write(path, serialized)?;
    Ok(())
}
