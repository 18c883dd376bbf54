//! Daily habit tracker
//!
//! An independent checklist persisted per calendar day, unrelated to the
//! task data model. Each local date gets its own key
//! (`habit-tracker:YYYY-MM-DD`) holding the ids of the habits completed that
//! day, so history accumulates without any rollover logic: a new day simply
//! reads an absent key as nothing done yet.

use chrono::Local;

use crate::keys;
use crate::store::Store;

/// A trackable daily habit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    /// Stable id, persisted in the per-day completion list
    pub id: String,

    /// Display label
    pub label: String,

    /// Display color name
    pub color: String,
}

/// The built-in habit set
pub fn default_habits() -> Vec<Habit> {
    let defaults = [
        ("habit-1", "Hydration", "blue"),
        ("habit-2", "Exercise", "green"),
        ("habit-3", "Reading", "purple"),
        ("habit-4", "Meditation", "orange"),
        ("habit-5", "Sleep 7h+", "pink"),
    ];
    defaults
        .iter()
        .map(|(id, label, color)| Habit {
            id: id.to_string(),
            label: label.to_string(),
            color: color.to_string(),
        })
        .collect()
}

/// Per-day habit checklist over the store
#[derive(Clone)]
pub struct HabitTracker {
    store: Store,
    habits: Vec<Habit>,
}

impl HabitTracker {
    /// Creates a tracker over the built-in habit set
    pub fn new(store: Store) -> Self {
        Self::with_habits(store, default_habits())
    }

    /// Creates a tracker over a custom habit set
    pub fn with_habits(store: Store, habits: Vec<Habit>) -> Self {
        Self { store, habits }
    }

    /// The tracked habits
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Ids of the habits completed today
    pub fn completed_today(&self) -> Vec<String> {
        self.store.read_array(&today_key())
    }

    /// Toggles a habit for today
    pub fn toggle(&self, habit_id: &str) {
        let key = today_key();
        let mut completed: Vec<String> = self.store.read_array(&key);
        if let Some(pos) = completed.iter().position(|id| id == habit_id) {
            completed.remove(pos);
        } else {
            completed.push(habit_id.to_string());
        }
        self.store.write_array(&key, &completed);
    }

    /// Clears today's completions
    pub fn reset_today(&self) {
        self.store.write_array::<String>(&today_key(), &[]);
    }

    /// Percentage of habits completed today, rounded
    pub fn progress(&self) -> u8 {
        if self.habits.is_empty() {
            return 0;
        }
        let done = self
            .completed_today()
            .iter()
            .filter(|id| self.habits.iter().any(|h| &h.id == *id))
            .count();
        ((done * 100 + self.habits.len() / 2) / self.habits.len()) as u8
    }
}

/// Today's storage key, from the local calendar date
fn today_key() -> String {
    format!(
        "{}{}",
        keys::HABIT_PREFIX,
        Local::now().format("%Y-%m-%d")
    )
}
