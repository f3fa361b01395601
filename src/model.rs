mod asset;
mod error;
mod viewport;

#[cfg(test)]
mod tests;

pub use asset::{GalleryEntry, ImageAsset, Named, RemoteFile};
pub use error::{CoreError, Result};
pub use viewport::Viewport;
