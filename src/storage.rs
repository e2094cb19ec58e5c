use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::Journal;

#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Decode(serde_json::Error),
    Encode(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(err) => write!(f, "io error: {err}"),
            StorageError::Decode(err) => write!(f, "failed to parse journal: {err}"),
            StorageError::Encode(err) => write!(f, "failed to encode journal: {err}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Loads the journal blob. A missing or empty file is an empty journal;
/// habit records written by older schemas get their absent fields defaulted.
pub fn load_journal(path: &Path) -> Result<Journal, StorageError> {
    let raw = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Journal::new()),
        Err(err) => return Err(StorageError::Io(err)),
    };

    if raw.trim().is_empty() {
        return Ok(Journal::new());
    }

    serde_json::from_str(&raw).map_err(StorageError::Decode)
}

pub fn save_journal(path: &Path, journal: &Journal) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(StorageError::Io)?;
        }
    }

    let blob = serde_json::to_string_pretty(journal).map_err(StorageError::Encode)?;
    fs::write(path, blob).map_err(StorageError::Io)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::fs;
    use std::path::PathBuf;

    use crate::domain::Journal;

    use super::{load_journal, save_journal};

    #[test]
    fn round_trips_journal_blob() {
        let mut journal = Journal::new();
        let id = journal
            .add_habit("Exercise", "Fitness")
            .expect("habit should be created");
        journal.add_habit("Read", "Mind").expect("habit should be created");
        let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        journal.toggle_habit(&id, day, day).expect("toggle should work");

        let path = temp_file("streakdeck_storage_roundtrip.json");
        save_journal(&path, &journal).expect("save should succeed");
        let loaded = load_journal(&path).expect("load should succeed");

        assert_eq!(loaded.habits.len(), 2);
        let habit = loaded.habit(&id).expect("habit should survive the trip");
        assert_eq!(habit.name, "Exercise");
        assert_eq!(habit.category, "Fitness");
        assert!(habit.is_completed(day));
        assert_eq!(habit.streak, 1);
        assert_eq!(habit.longest_streak, 1);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_an_empty_journal() {
        let path = temp_file("streakdeck_storage_missing.json");
        let _ = fs::remove_file(&path);
        let journal = load_journal(&path).expect("load should succeed");
        assert!(journal.habits.is_empty());
    }

    #[test]
    fn defaults_fields_absent_from_older_blobs() {
        // Blob written by the oldest schema: names and categories only.
        let raw = r#"[
            {"name": "Exercise", "category": "Fitness"},
            {"name": "Read", "category": "", "log": {"2026-03-14": true}, "streak": 1, "longestStreak": 4}
        ]"#;
        let path = temp_file("streakdeck_storage_legacy.json");
        fs::write(&path, raw).expect("write should succeed");

        let journal = load_journal(&path).expect("load should succeed");
        assert_eq!(journal.habits.len(), 2);

        let exercise = &journal.habits[0];
        assert!(!exercise.id.is_empty());
        assert!(exercise.log.is_empty());
        assert_eq!(exercise.streak, 0);
        assert_eq!(exercise.longest_streak, 0);
        assert!(exercise.color.is_none());

        let read = &journal.habits[1];
        let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        assert!(read.is_completed(day));
        assert_eq!(read.streak, 1);
        assert_eq!(read.longest_streak, 4);
        let _ = fs::remove_file(path);
    }

    fn temp_file(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("{}_{}", name, std::process::id()));
        path
    }
}
