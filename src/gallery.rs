mod filter;
mod listing;
mod selection;

#[cfg(test)]
mod tests;

pub use filter::{available_letters, filter_by_letter, parse_letter};
pub use listing::{build_entries, is_supported_name};
pub use selection::DefaultSelection;
