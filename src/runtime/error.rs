use crate::config::ConfigError;
use crate::model::CoreError;
use crate::source::SourceError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("gallery source error: {0}")]
    Source(#[from] SourceError),

    #[error("image model error: {0}")]
    Core(#[from] CoreError),

    #[error("image decode failure: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("no gallery entry named `{0}`")]
    NotFound(String),
}
