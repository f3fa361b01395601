use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("image `{name}` has a zero dimension ({width}x{height})")]
    ZeroDimension {
        name: String,
        width: u32,
        height: u32,
    },

    #[error("invalid viewport {width}x{height}: both sides must be positive and finite")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid filter letter `{0}`: expected a single alphabetic character")]
    InvalidLetter(String),
}
