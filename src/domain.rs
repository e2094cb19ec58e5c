use std::collections::BTreeMap;

use chrono::{Duration, Local, NaiveDate};
use rand::{Rng, distributions::Alphanumeric, thread_rng};
use serde::{Deserialize, Serialize};

const ID_LEN: usize = 8;

/// Streak walks stop after this many days; an unbroken year reports exactly 365.
pub const STREAK_LOOKBACK_DAYS: u32 = 365;

/// Palette assigned round-robin at creation so a habit keeps one color for life.
pub const HABIT_COLORS: [&str; 12] = [
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "light_red",
    "light_green",
    "light_yellow",
    "light_blue",
    "light_magenta",
    "light_cyan",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    #[serde(default = "generate_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Completed days only: an entry is either present-true or absent.
    #[serde(default)]
    pub log: BTreeMap<NaiveDate, bool>,
    #[serde(default)]
    pub streak: u32,
    #[serde(default, rename = "longestStreak")]
    pub longest_streak: u32,
    #[serde(default)]
    pub color: Option<String>,
}

impl Habit {
    pub fn is_completed(&self, day: NaiveDate) -> bool {
        self.log.get(&day).copied().unwrap_or(false)
    }

    pub fn completed_today(&self) -> bool {
        self.is_completed(today())
    }
}

/// The whole store, serialized transparently as a bare array of habit records
/// so the blob schema stays an ordered habit sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    pub habits: Vec<Habit>,
}

impl Journal {
    pub fn new() -> Self {
        Self { habits: Vec::new() }
    }

    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    pub fn habit_mut(&mut self, id: &str) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|habit| habit.id == id)
    }

    /// Appends a new habit and returns its id; a name that trims empty is
    /// rejected as a no-op.
    pub fn add_habit(&mut self, name: &str, category: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let id = generate_id();
        let color = HABIT_COLORS[self.habits.len() % HABIT_COLORS.len()];
        self.habits.push(Habit {
            id: id.clone(),
            name: name.to_string(),
            category: category.trim().to_string(),
            log: BTreeMap::new(),
            streak: 0,
            longest_streak: 0,
            color: Some(color.to_string()),
        });
        Some(id)
    }

    /// Flips the log entry for `day` and recomputes the streak anchored at
    /// `today`, so backfilling a past day still yields the run ending today.
    /// The longest streak ratchets only on the path that sets the entry,
    /// never on undo. Returns whether the day is now complete.
    pub fn toggle_habit(
        &mut self,
        habit_id: &str,
        day: NaiveDate,
        today: NaiveDate,
    ) -> Result<bool, String> {
        let habit = self
            .habit_mut(habit_id)
            .ok_or_else(|| format!("habit not found: {habit_id}"))?;

        let completed_now = if habit.is_completed(day) {
            habit.log.remove(&day);
            false
        } else {
            habit.log.insert(day, true);
            true
        };

        let streak = recalc_streak_from(habit, today);
        habit.streak = streak;
        if completed_now && streak > habit.longest_streak {
            habit.longest_streak = streak;
        }

        Ok(completed_now)
    }

    pub fn remove_habit(&mut self, habit_id: &str) -> Result<Habit, String> {
        let position = self
            .habits
            .iter()
            .position(|habit| habit.id == habit_id)
            .ok_or_else(|| format!("habit not found: {habit_id}"))?;
        Ok(self.habits.remove(position))
    }

    /// Distinct non-empty categories across all habits, in first-appearance
    /// order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = Vec::new();
        for habit in &self.habits {
            if habit.category.is_empty() {
                continue;
            }
            if !categories.contains(&habit.category) {
                categories.push(habit.category.clone());
            }
        }
        categories
    }
}

/// Current calendar day on the local clock. Day boundaries follow the local
/// timezone with no further normalization.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

/// Consecutive completed days ending at `today`, stopping at the first gap.
pub fn recalc_streak_from(habit: &Habit, today: NaiveDate) -> u32 {
    let mut streak = 0;
    for offset in 0..STREAK_LOOKBACK_DAYS {
        let day = today - Duration::days(offset.into());
        if habit.is_completed(day) {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Completed days among the `window_days` most recent days including today.
pub fn completion_count(habit: &Habit, window_days: u32) -> u32 {
    completion_count_from(habit, window_days, today())
}

pub fn completion_count_from(habit: &Habit, window_days: u32, today: NaiveDate) -> u32 {
    let mut count = 0;
    for offset in 0..window_days {
        let day = today - Duration::days(offset.into());
        if habit.is_completed(day) {
            count += 1;
        }
    }
    count
}

pub fn generate_id() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::{Journal, STREAK_LOOKBACK_DAYS, completion_count_from, recalc_streak_from};

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn journal_with(name: &str, category: &str) -> (Journal, String) {
        let mut journal = Journal::new();
        let id = journal
            .add_habit(name, category)
            .expect("habit should be created");
        (journal, id)
    }

    #[test]
    fn rejects_empty_name() {
        let mut journal = Journal::new();
        assert!(journal.add_habit("   ", "Fitness").is_none());
        assert!(journal.habits.is_empty());
    }

    #[test]
    fn new_habit_starts_with_zero_streaks() {
        let (journal, id) = journal_with("Exercise", "Fitness");
        let habit = journal.habit(&id).expect("habit should exist");
        assert!(habit.log.is_empty());
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.longest_streak, 0);
        assert!(habit.color.is_some());
    }

    #[test]
    fn toggle_twice_restores_log_and_streak() {
        let (mut journal, id) = journal_with("Exercise", "Fitness");
        let day = fixed_day();

        let completed = journal.toggle_habit(&id, day, day).expect("toggle should work");
        assert!(completed);
        let habit = journal.habit(&id).unwrap();
        assert_eq!(habit.streak, 1);
        assert_eq!(habit.longest_streak, 1);

        let completed = journal.toggle_habit(&id, day, day).expect("toggle should work");
        assert!(!completed);
        let habit = journal.habit(&id).unwrap();
        assert!(habit.log.is_empty());
        assert_eq!(habit.streak, 0);
        // Undo never lowers the longest streak.
        assert_eq!(habit.longest_streak, 1);
    }

    #[test]
    fn streak_counts_suffix_ending_today() {
        let (mut journal, id) = journal_with("Read", "Mind");
        let day = fixed_day();
        for offset in 0..3 {
            journal
                .toggle_habit(&id, day - Duration::days(offset), day)
                .expect("toggle should work");
        }

        let habit = journal.habit(&id).unwrap();
        assert_eq!(habit.streak, 3);
        assert_eq!(recalc_streak_from(habit, day), 3);
    }

    #[test]
    fn streak_is_zero_when_today_missing() {
        let (mut journal, id) = journal_with("Read", "Mind");
        let day = fixed_day();
        // Completed the three days immediately preceding today, but not today.
        for offset in 1..=3 {
            journal
                .toggle_habit(&id, day - Duration::days(offset), day)
                .expect("toggle should work");
        }

        let habit = journal.habit(&id).unwrap();
        assert_eq!(recalc_streak_from(habit, day), 0);
    }

    #[test]
    fn streak_stops_at_first_gap() {
        let (mut journal, id) = journal_with("Read", "Mind");
        let day = fixed_day();
        for offset in [0, 1, 3, 4] {
            journal
                .toggle_habit(&id, day - Duration::days(offset), day)
                .expect("toggle should work");
        }

        let habit = journal.habit(&id).unwrap();
        assert_eq!(recalc_streak_from(habit, day), 2);
    }

    #[test]
    fn completion_counts_stay_within_window() {
        let (mut journal, id) = journal_with("Stretch", "Fitness");
        let day = fixed_day();
        for offset in 0..40 {
            journal
                .toggle_habit(&id, day - Duration::days(offset), day)
                .expect("toggle should work");
        }

        let habit = journal.habit(&id).unwrap();
        assert_eq!(completion_count_from(habit, 7, day), 7);
        assert_eq!(completion_count_from(habit, 30, day), 30);
    }

    #[test]
    fn completion_count_ignores_days_outside_window() {
        let (mut journal, id) = journal_with("Stretch", "Fitness");
        let day = fixed_day();
        for offset in [0, 2, 10, 29, 30] {
            journal
                .toggle_habit(&id, day - Duration::days(offset), day)
                .expect("toggle should work");
        }

        let habit = journal.habit(&id).unwrap();
        assert_eq!(completion_count_from(habit, 7, day), 2);
        assert_eq!(completion_count_from(habit, 30, day), 4);
    }

    #[test]
    fn remove_deletes_exactly_one_habit() {
        let mut journal = Journal::new();
        let first = journal.add_habit("Exercise", "Fitness").unwrap();
        let second = journal.add_habit("Read", "Mind").unwrap();
        let third = journal.add_habit("Sleep early", "").unwrap();

        let removed = journal.remove_habit(&second).expect("remove should work");
        assert_eq!(removed.name, "Read");
        assert_eq!(journal.habits.len(), 2);
        assert!(journal.habit(&first).is_some());
        assert!(journal.habit(&second).is_none());
        assert!(journal.habit(&third).is_some());
    }

    #[test]
    fn categories_are_distinct_and_ordered() {
        let mut journal = Journal::new();
        journal.add_habit("Exercise", "Fitness").unwrap();
        journal.add_habit("Read", "Mind").unwrap();
        journal.add_habit("Stretch", "Fitness").unwrap();
        journal.add_habit("Journal", "").unwrap();

        assert_eq!(journal.categories(), vec!["Fitness", "Mind"]);
    }

    #[test]
    fn longest_streak_ratchets_across_toggles() {
        let (mut journal, id) = journal_with("Exercise", "Fitness");
        let day = fixed_day();
        for offset in 0..5 {
            journal
                .toggle_habit(&id, day - Duration::days(offset), day)
                .expect("toggle should work");
        }
        assert_eq!(journal.habit(&id).unwrap().longest_streak, 5);

        // Break the run; the record stands.
        journal
            .toggle_habit(&id, day - Duration::days(2), day)
            .expect("toggle should work");
        let habit = journal.habit(&id).unwrap();
        assert_eq!(habit.streak, 2);
        assert_eq!(habit.longest_streak, 5);
    }

    #[test]
    fn backfill_keeps_streak_anchored_at_today() {
        let (mut journal, id) = journal_with("Exercise", "Fitness");
        let day = fixed_day();

        journal.toggle_habit(&id, day, day).expect("toggle should work");
        // Backfilling yesterday extends the run ending today.
        journal
            .toggle_habit(&id, day - Duration::days(1), day)
            .expect("toggle should work");

        let habit = journal.habit(&id).unwrap();
        assert_eq!(habit.streak, 2);
        assert_eq!(habit.longest_streak, 2);
        assert_eq!(recalc_streak_from(habit, day), 2);
    }

    #[test]
    fn streak_caps_at_lookback_window() {
        let (mut journal, id) = journal_with("Meditate", "Mind");
        let day = fixed_day();
        {
            let habit = journal.habit_mut(&id).unwrap();
            for offset in 0..400i64 {
                habit.log.insert(day - Duration::days(offset), true);
            }
        }

        let habit = journal.habit(&id).unwrap();
        assert_eq!(recalc_streak_from(habit, day), STREAK_LOOKBACK_DAYS);
    }
}
