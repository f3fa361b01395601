use std::sync::Arc;

use crate::config::GalleryConfig;
use crate::source::{GallerySource, HttpSource};

use super::{DownloadService, GalleryService, MetadataService, Result};

#[derive(Clone)]
pub struct AppContext {
    config: GalleryConfig,
    gallery_service: GalleryService,
    metadata_service: MetadataService,
    download_service: DownloadService,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppContext")
            .field("listing_url", &self.config.listing_url())
            .finish()
    }
}

impl AppContext {
    pub fn new(config: GalleryConfig) -> Result<Self> {
        config.validate()?;
        let source = Arc::new(HttpSource::new(config.clone()));
        Ok(Self::with_source(config, source))
    }

    pub fn with_source(config: GalleryConfig, source: Arc<dyn GallerySource>) -> Self {
        Self {
            gallery_service: GalleryService::new(config.clone(), Arc::clone(&source)),
            metadata_service: MetadataService::new(Arc::clone(&source)),
            download_service: DownloadService::new(source),
            config,
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn gallery_service(&self) -> &GalleryService {
        &self.gallery_service
    }

    pub fn metadata_service(&self) -> &MetadataService {
        &self.metadata_service
    }

    pub fn download_service(&self) -> &DownloadService {
        &self.download_service
    }
}
