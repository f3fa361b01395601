mod error;
mod io;
mod settings;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, Result};
pub use io::{load_config, load_or_default, save_config};
pub use settings::GalleryConfig;
