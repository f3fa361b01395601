mod client;
mod commit;
mod error;

#[cfg(test)]
mod tests;

pub use client::{GallerySource, HttpSource};
pub use commit::{CommitInfo, format_commit_date, parse_latest_commit};
pub use error::{Result, SourceError};
