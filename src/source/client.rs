use std::io::Read;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::GalleryConfig;
use crate::model::RemoteFile;

use super::commit::parse_latest_commit;
use super::{CommitInfo, Result, SourceError};

/// Upper bound for a single downloaded image.
const MAX_BODY_BYTES: u64 = 128 * 1024 * 1024;
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Remote collaborator that lists files and serves their bytes.
pub trait GallerySource: Send + Sync {
    fn list_files(&self) -> Result<Vec<RemoteFile>>;
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
    /// Newest commit touching `name` in the pictures folder, if any.
    fn latest_commit(&self, name: &str) -> Result<Option<CommitInfo>>;
}

/// GitHub-backed source over a blocking `ureq` agent.
#[derive(Clone)]
pub struct HttpSource {
    agent: ureq::Agent,
    config: GalleryConfig,
}

impl std::fmt::Debug for HttpSource {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("HttpSource")
            .field("listing_url", &self.config.listing_url())
            .finish()
    }
}

impl HttpSource {
    pub fn new(config: GalleryConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build();
        Self { agent, config }
    }

    fn send(&self, request: ureq::Request) -> Result<ureq::Response> {
        let url = request.url().to_string();
        debug!(%url, "sending request");
        match request.call() {
            Ok(response) => Ok(response),
            Err(ureq::Error::Status(status, _)) => {
                warn!(%url, status, "request rejected");
                Err(SourceError::Status { url, status })
            }
            Err(error) => {
                warn!(%url, %error, "request failed");
                Err(SourceError::Transport {
                    url,
                    message: error.to_string(),
                })
            }
        }
    }
}

impl GallerySource for HttpSource {
    fn list_files(&self) -> Result<Vec<RemoteFile>> {
        let request = self
            .agent
            .get(&self.config.listing_url())
            .query("ref", &self.config.thumbs_ref)
            .set("Accept", GITHUB_JSON);
        let body = self.send(request)?.into_string()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.send(self.agent.get(url))?;
        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(MAX_BODY_BYTES + 1)
            .read_to_end(&mut bytes)?;
        if bytes.len() as u64 > MAX_BODY_BYTES {
            return Err(SourceError::TooLarge {
                url: url.to_string(),
                limit: MAX_BODY_BYTES,
            });
        }
        debug!(url, bytes = bytes.len(), "downloaded");
        Ok(bytes)
    }

    fn latest_commit(&self, name: &str) -> Result<Option<CommitInfo>> {
        let request = self
            .agent
            .get(&self.config.commits_url())
            .query("path", &self.config.picture_path(name))
            .query("page", "1")
            .query("per_page", "1")
            .set("Accept", GITHUB_JSON);
        let body = self.send(request)?.into_string()?;
        parse_latest_commit(&body)
    }
}
