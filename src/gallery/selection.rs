use serde::{Deserialize, Serialize};

use crate::model::Named;

/// Which entry the viewer opens once the listing arrives.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", content = "value", rename_all = "snake_case")]
pub enum DefaultSelection {
    None,
    #[default]
    First,
    /// Falls back to the first entry when out of range.
    Index(usize),
    /// Falls back to the first entry when no name matches.
    Name(String),
}

impl DefaultSelection {
    pub fn resolve<'a, T: Named>(&self, items: &'a [T]) -> Option<&'a T> {
        match self {
            Self::None => None,
            Self::First => items.first(),
            Self::Index(index) => items.get(*index).or_else(|| items.first()),
            Self::Name(name) => items
                .iter()
                .find(|item| item.name().eq_ignore_ascii_case(name))
                .or_else(|| items.first()),
        }
    }
}
