//! Reminder settings
//!
//! Two scalar values persisted outside the record namespace:
//! `daily-reminder:enabled` ("true"/"false") and `daily-reminder:time`
//! ("HH:MM"). Defaults are disabled at 09:00; missing or malformed values
//! fall back to the defaults rather than failing.

use std::fmt;
use std::str::FromStr;

use localist_store::{keys, Store};

/// Error type for reminder operations
#[derive(Debug, thiserror::Error)]
pub enum ReminderError {
    /// The value does not parse as an "HH:MM" wall-clock time
    #[error("invalid reminder time {0:?}, expected HH:MM")]
    InvalidTime(String),
}

/// A local wall-clock time of day, minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderTime {
    hour: u32,
    minute: u32,
}

impl ReminderTime {
    /// Creates a time of day
    ///
    /// # Errors
    ///
    /// Returns `ReminderError::InvalidTime` when the pair is out of range.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ReminderError> {
        if hour > 23 || minute > 59 {
            return Err(ReminderError::InvalidTime(format!("{hour}:{minute}")));
        }
        Ok(Self { hour, minute })
    }

    /// Hour component, 0-23
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute component, 0-59
    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl Default for ReminderTime {
    /// 09:00
    fn default() -> Self {
        Self { hour: 9, minute: 0 }
    }
}

impl FromStr for ReminderTime {
    type Err = ReminderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ReminderError::InvalidTime(s.to_string());
        let (hh, mm) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hh.trim().parse().map_err(|_| invalid())?;
        let minute: u32 = mm.trim().parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Persisted reminder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReminderSettings {
    /// Whether the daily reminder is armed
    pub enabled: bool,

    /// Local fire time
    pub time: ReminderTime,
}

impl ReminderSettings {
    /// Loads settings from the store, falling back to the defaults
    ///
    /// A missing or malformed enabled flag reads as disabled; a malformed
    /// time reads as 09:00.
    pub fn load(store: &Store) -> Self {
        let enabled = store
            .get_string(keys::REMINDER_ENABLED)
            .map(|v| v == "true")
            .unwrap_or(false);
        let time = store
            .get_string(keys::REMINDER_TIME)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        Self { enabled, time }
    }

    /// Persists both values
    pub fn save(&self, store: &Store) {
        store.set_string(keys::REMINDER_ENABLED, if self.enabled { "true" } else { "false" });
        store.set_string(keys::REMINDER_TIME, &self.time.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let time: ReminderTime = "09:00".parse().unwrap();
        assert_eq!((time.hour(), time.minute()), (9, 0));
        assert_eq!(time.to_string(), "09:00");

        // Lenient widths on input, padded on output
        let time: ReminderTime = "7:5".parse().unwrap();
        assert_eq!(time.to_string(), "07:05");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<ReminderTime>().is_err());
        assert!("0900".parse::<ReminderTime>().is_err());
        assert!("ab:cd".parse::<ReminderTime>().is_err());
        assert!("25:00".parse::<ReminderTime>().is_err());
        assert!("12:60".parse::<ReminderTime>().is_err());
    }

    #[test]
    fn test_default_is_disabled_at_nine() {
        let settings = ReminderSettings::default();
        assert!(!settings.enabled);
        assert_eq!(settings.time.to_string(), "09:00");
    }

    #[test]
    fn test_load_save_roundtrip() {
        let store = Store::in_memory();
        let settings = ReminderSettings {
            enabled: true,
            time: ReminderTime::new(21, 30).unwrap(),
        };
        settings.save(&store);
        assert_eq!(ReminderSettings::load(&store), settings);
    }

    #[test]
    fn test_load_malformed_falls_back() {
        let store = Store::in_memory();
        store.set_string(keys::REMINDER_ENABLED, "yes please");
        store.set_string(keys::REMINDER_TIME, "noonish");
        let settings = ReminderSettings::load(&store);
        assert!(!settings.enabled);
        assert_eq!(settings.time, ReminderTime::default());
    }
}
