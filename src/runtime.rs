mod context;
mod download_service;
mod error;
mod gallery_service;
mod metadata_service;


pub use context::AppContext;
pub use download_service::DownloadService;
pub use error::{AppError, Result};
pub use gallery_service::GalleryService;
pub use metadata_service::{LoadedAsset, MetadataReport, MetadataService, probe_asset};
