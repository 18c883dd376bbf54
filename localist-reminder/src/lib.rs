//! # Localist Reminder
//!
//! Daily reminder scheduler for localist: a single-timer loop that fires a
//! notification at a configured local wall-clock time, every day, while the
//! process is running. Nothing is backgroundable — a fire time that passes
//! while the process is down is simply missed.
//!
//! ## Module Organization
//!
//! - `settings`: enabled flag and "HH:MM" fire time, persisted via the store
//! - `schedule`: next-occurrence computation
//! - `notify`: notifier seam with permission flow, plus a mock for tests
//! - `scheduler`: the self-rescheduling timer loop

pub mod notify;
pub mod schedule;
pub mod scheduler;
pub mod settings;

pub use notify::{MockNotifier, Notifier, Permission};
pub use scheduler::DailyReminder;
pub use settings::{ReminderError, ReminderSettings, ReminderTime};

/// Current version of the localist reminder library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
