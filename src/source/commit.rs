use serde::{Deserialize, Serialize};

use super::Result;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Who added an image and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    pub author: String,
    pub avatar_url: String,
    pub date: String,
    pub message: String,
    pub profile_url: String,
}

#[derive(Debug, Deserialize)]
struct CommitEnvelope {
    commit: CommitBody,
    /// Null when the commit email is not linked to an account.
    author: Option<AccountRef>,
}

#[derive(Debug, Deserialize)]
struct CommitBody {
    author: CommitSignature,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct CommitSignature {
    name: String,
    date: String,
}

#[derive(Debug, Deserialize)]
struct AccountRef {
    #[serde(default)]
    avatar_url: String,
    #[serde(default)]
    html_url: String,
}

/// Parses a commits listing and keeps the first (newest) entry.
pub fn parse_latest_commit(body: &str) -> Result<Option<CommitInfo>> {
    let commits: Vec<CommitEnvelope> = serde_json::from_str(body)?;
    Ok(commits.into_iter().next().map(|envelope| {
        let (avatar_url, profile_url) = envelope
            .author
            .map(|account| (account.avatar_url, account.html_url))
            .unwrap_or_default();
        CommitInfo {
            author: envelope.commit.author.name,
            avatar_url,
            date: format_commit_date(&envelope.commit.author.date),
            message: envelope.commit.message,
            profile_url,
        }
    }))
}

/// `2024-03-05T10:00:00Z` becomes `March 5, 2024`. Unrecognized input is returned as-is.
///
/// The date is the calendar day of the timestamp as written, which the commits API reports
/// in UTC. No local timezone is applied, so output is the same on every machine.
pub fn format_commit_date(timestamp: &str) -> String {
    let day_part = timestamp.split('T').next().unwrap_or_default();
    long_date(day_part).unwrap_or_else(|| timestamp.to_string())
}

fn long_date(day_part: &str) -> Option<String> {
    let mut fields = day_part.splitn(3, '-');
    let year = fields.next()?.parse::<u32>().ok()?;
    let month = fields.next()?.parse::<usize>().ok()?;
    let day = fields.next()?.parse::<u32>().ok()?;
    let month_name = MONTHS.get(month.checked_sub(1)?)?;
    (1..=31)
        .contains(&day)
        .then(|| format!("{month_name} {day}, {year}"))
}
