//! Next-occurrence computation
//!
//! The reminder fires at a local wall-clock time: today's occurrence when it
//! is still ahead, otherwise tomorrow's. Computation works on naive local
//! datetimes; at the moment of firing "today's" occurrence equals now, so
//! the next one lands a day later.

use chrono::{Duration as ChronoDuration, Local, NaiveDateTime};
use std::time::Duration;

use crate::settings::ReminderTime;

/// Returns the next occurrence of `time` strictly after `now`
pub fn next_fire(now: NaiveDateTime, time: ReminderTime) -> NaiveDateTime {
    let today = now
        .date()
        .and_hms_opt(time.hour(), time.minute(), 0)
        .unwrap_or(now);
    if today > now {
        today
    } else {
        today + ChronoDuration::days(1)
    }
}

/// Delay from the local clock's now until the next occurrence of `time`
pub fn delay_until_next(time: ReminderTime) -> Duration {
    let now = Local::now().naive_local();
    let target = next_fire(now, time);
    (target - now).to_std().unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_future_time_fires_today() {
        let time = ReminderTime::new(9, 0).unwrap();
        let next = next_fire(at(8, 0, 0), time);
        assert_eq!(next, at(9, 0, 0));
    }

    #[test]
    fn test_past_time_fires_tomorrow() {
        let time = ReminderTime::new(9, 0).unwrap();
        let next = next_fire(at(10, 0, 0), time);
        assert_eq!(next, at(9, 0, 0) + ChronoDuration::days(1));
    }

    #[test]
    fn test_exact_moment_fires_tomorrow() {
        // At the fire moment the next occurrence is a day out, which is what
        // makes the re-arm after firing land on the following day.
        let time = ReminderTime::new(9, 0).unwrap();
        let next = next_fire(at(9, 0, 0), time);
        assert_eq!(next, at(9, 0, 0) + ChronoDuration::days(1));
    }

    #[test]
    fn test_delay_is_positive() {
        let time = ReminderTime::new(0, 0).unwrap();
        assert!(delay_until_next(time) > Duration::ZERO);
    }
}
