use std::fmt::{Display, Formatter};

use crate::domain::Journal;

#[derive(Debug)]
pub enum RemoteError {
    Http(reqwest::Error),
    Decode(serde_json::Error),
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteError::Http(err) => write!(f, "remote fetch failed: {err}"),
            RemoteError::Decode(err) => write!(f, "failed to parse remote habits: {err}"),
        }
    }
}

impl std::error::Error for RemoteError {}

/// Fetches a JSON array of habit-like records from `url`. Records missing
/// `log`/`streak`/`longestStreak` are normalized the same way storage
/// normalizes older blobs. On any failure the caller keeps its current state.
pub fn fetch_journal(url: &str) -> Result<Journal, RemoteError> {
    let body = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .map_err(RemoteError::Http)?
        .text()
        .map_err(RemoteError::Http)?;

    parse_journal(&body)
}

pub fn parse_journal(raw: &str) -> Result<Journal, RemoteError> {
    serde_json::from_str(raw).map_err(RemoteError::Decode)
}

#[cfg(test)]
mod tests {
    use super::parse_journal;

    #[test]
    fn normalizes_habit_like_records() {
        let raw = r#"[
            {"name": "Exercise", "category": "Fitness"},
            {"name": "Read", "category": "Mind", "log": {"2026-03-14": true}, "streak": 1, "longestStreak": 2}
        ]"#;

        let journal = parse_journal(raw).expect("parse should succeed");
        assert_eq!(journal.habits.len(), 2);

        let exercise = &journal.habits[0];
        assert!(exercise.log.is_empty());
        assert_eq!(exercise.streak, 0);
        assert_eq!(exercise.longest_streak, 0);
        assert!(!exercise.id.is_empty());

        let read = &journal.habits[1];
        assert_eq!(read.streak, 1);
        assert_eq!(read.longest_streak, 2);
    }

    #[test]
    fn rejects_non_array_payloads() {
        assert!(parse_journal("{\"habits\": 3}").is_err());
        assert!(parse_journal("not json").is_err());
    }
}
