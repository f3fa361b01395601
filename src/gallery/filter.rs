use crate::model::{CoreError, Named, Result};

/// Keeps the items whose name starts with `letter`, ignoring case. `None` keeps everything.
pub fn filter_by_letter<T: Named + Clone>(items: &[T], letter: Option<char>) -> Vec<T> {
    let Some(letter) = letter else {
        return items.to_vec();
    };
    let prefix = letter.to_uppercase().collect::<String>();
    items
        .iter()
        .filter(|item| item.name().to_uppercase().starts_with(&prefix))
        .cloned()
        .collect()
}

/// Distinct upper-case initials present in `items`, sorted.
pub fn available_letters<T: Named>(items: &[T]) -> Vec<char> {
    let mut letters = items
        .iter()
        .filter_map(|item| item.name().chars().next())
        .filter(|initial| initial.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect::<Vec<_>>();
    letters.sort_unstable();
    letters.dedup();
    letters
}

/// Parses a user-supplied filter such as `a` or `A`.
pub fn parse_letter(raw: &str) -> Result<char> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_alphabetic() => {
            Ok(letter.to_uppercase().next().unwrap_or(letter))
        }
        _ => Err(CoreError::InvalidLetter(raw.to_string())),
    }
}
