use serde::{Deserialize, Serialize};

use crate::gallery::DefaultSelection;

use super::{ConfigError, Result};

/// Where the gallery comes from and how the viewer behaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub owner: String,
    pub repo: String,
    pub api_base: String,
    pub raw_base: String,
    /// Directory holding the downscaled previews.
    pub thumbs_path: String,
    pub thumbs_ref: String,
    /// Directory holding the full-resolution images.
    pub pictures_path: String,
    pub branch: String,
    pub default_selection: DefaultSelection,
    /// Minimum time the loading overlay stays up after an image arrives.
    pub transition_ms: u64,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            owner: "RyuZinOh".to_string(),
            repo: ".dotfiles".to_string(),
            api_base: "https://api.github.com".to_string(),
            raw_base: "https://raw.githubusercontent.com".to_string(),
            thumbs_path: "thumbnails".to_string(),
            thumbs_ref: "thumbs".to_string(),
            pictures_path: "Pictures".to_string(),
            branch: "main".to_string(),
            default_selection: DefaultSelection::default(),
            transition_ms: 120,
            user_agent: concat!("wallpaper-gallery/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
        }
    }
}

impl GalleryConfig {
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("owner", &self.owner),
            ("repo", &self.repo),
            ("api_base", &self.api_base),
            ("raw_base", &self.raw_base),
            ("thumbs_path", &self.thumbs_path),
            ("pictures_path", &self.pictures_path),
            ("branch", &self.branch),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("`{field}` must not be empty")));
            }
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "`timeout_secs` must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn listing_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            trim_slash(&self.api_base),
            self.owner,
            self.repo,
            self.thumbs_path.trim_matches('/')
        )
    }

    pub fn commits_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/commits",
            trim_slash(&self.api_base),
            self.owner,
            self.repo
        )
    }

    /// Repository-relative path of a full-resolution image.
    pub fn picture_path(&self, name: &str) -> String {
        format!("{}/{name}", self.pictures_path.trim_matches('/'))
    }

    pub fn full_image_url(&self, name: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            trim_slash(&self.raw_base),
            self.owner,
            self.repo,
            self.branch,
            self.picture_path(name)
        )
    }

    /// Browser link to the folder contributors add images to.
    pub fn contribution_url(&self) -> String {
        format!(
            "https://github.com/{}/{}/tree/{}/{}",
            self.owner,
            self.repo,
            self.branch,
            self.pictures_path.trim_matches('/')
        )
    }
}

fn trim_slash(value: &str) -> &str {
    value.trim_end_matches('/')
}
