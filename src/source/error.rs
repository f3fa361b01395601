use thiserror::Error;

pub type Result<T> = std::result::Result<T, SourceError>;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to {url} failed with HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("response body exceeds {limit} bytes: {url}")]
    TooLarge { url: String, limit: u64 },

    #[error("response I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("response JSON failure: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
