mod contribution;
mod derive;
mod format;
mod types;


pub use contribution::{
    ContributionGuide, ContributionIssue, STANDARD_RESOLUTION, ULTRAWIDE_RESOLUTION, ULTRAWIDE_TAG,
    check_contribution,
};
pub use derive::{NOMINAL_DIAGONAL_INCHES, derive_metadata, reduce_aspect};
pub use format::{UNKNOWN, format_file_size, format_megapixels};
pub use types::{AspectRatio, DerivedMetadata, Orientation, ResolutionClass};
