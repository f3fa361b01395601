use std::fmt;

use serde::Serialize;

use crate::model::ImageAsset;

/// Name fragment that marks a wallpaper as ultrawide.
pub const ULTRAWIDE_TAG: &str = "maxxed";
pub const STANDARD_RESOLUTION: (u32, u32) = (1920, 1080);
pub const ULTRAWIDE_RESOLUTION: (u32, u32) = (2560, 1080);
const ACCEPTED_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ContributionIssue {
    UnsupportedFormat(String),
    WrongResolution {
        expected: (u32, u32),
        actual: (u32, u32),
    },
    MissingUltrawideTag,
}

impl fmt::Display for ContributionIssue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat(extension) => {
                write!(formatter, "format `{extension}` is not accepted; use jpg or jpeg")
            }
            Self::WrongResolution { expected, actual } => write!(
                formatter,
                "resolution {}x{} does not match the required {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::MissingUltrawideTag => write!(
                formatter,
                "ultrawide images must include `{ULTRAWIDE_TAG}_` in the file name"
            ),
        }
    }
}

/// Checks a file against the collection's naming and resolution rules.
pub fn check_contribution(asset: &ImageAsset) -> Vec<ContributionIssue> {
    let mut issues = Vec::new();

    let extension = asset
        .extension()
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        issues.push(ContributionIssue::UnsupportedFormat(extension));
    }

    let actual = (asset.width, asset.height);
    let tagged = asset.name.to_lowercase().contains(ULTRAWIDE_TAG);
    if tagged {
        if actual != ULTRAWIDE_RESOLUTION {
            issues.push(ContributionIssue::WrongResolution {
                expected: ULTRAWIDE_RESOLUTION,
                actual,
            });
        }
    } else if actual == ULTRAWIDE_RESOLUTION {
        issues.push(ContributionIssue::MissingUltrawideTag);
    } else if actual != STANDARD_RESOLUTION {
        issues.push(ContributionIssue::WrongResolution {
            expected: STANDARD_RESOLUTION,
            actual,
        });
    }

    issues
}

/// Static text of the "Contribute Wallpapers" panel.
#[derive(Debug, Clone, Serialize)]
pub struct ContributionGuide {
    pub repository_url: String,
    pub requirements: Vec<(String, String)>,
    pub steps: Vec<String>,
    pub note: String,
}

impl ContributionGuide {
    pub fn new(repository_url: impl Into<String>) -> Self {
        Self {
            repository_url: repository_url.into(),
            requirements: vec![
                (
                    format!(
                        "Standard (16:9): {}x{}",
                        STANDARD_RESOLUTION.0, STANDARD_RESOLUTION.1
                    ),
                    "Naming: normal convention (e.g. sunset.jpg, mountain.jpg)".to_string(),
                ),
                (
                    format!(
                        "Ultrawide (21:9): {}x{}",
                        ULTRAWIDE_RESOLUTION.0, ULTRAWIDE_RESOLUTION.1
                    ),
                    format!(
                        "Naming: must include `{ULTRAWIDE_TAG}_` (e.g. {ULTRAWIDE_TAG}_sunset.jpg, city_{ULTRAWIDE_TAG}_.jpeg)"
                    ),
                ),
            ],
            steps: vec![
                "Fork the repository".to_string(),
                "Add your images to the Pictures folder".to_string(),
                "Follow the naming convention above".to_string(),
                "Submit a pull request".to_string(),
            ],
            note: "Images must be jpg or jpeg.".to_string(),
        }
    }
}
