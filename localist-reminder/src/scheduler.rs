//! The daily reminder loop
//!
//! One pending timer exists at any moment. Enabling the reminder (or
//! changing its time) cancels the pending sleep and arms a fresh one for the
//! next occurrence; after firing, the loop immediately re-arms for the
//! following day. Disabling or dropping the scheduler cancels the pending
//! timer. Missed occurrences while the process is down are not replayed.
//!
//! # Fire semantics
//!
//! - permission granted: deliver the notification
//! - permission undetermined: ask once; deliver when granted, otherwise
//!   invoke the fallback
//! - permission denied: invoke the fallback
//!
//! The fallback is a caller-supplied hook for surfacing the reminder some
//! other way (an in-app banner, say) when native notifications are off the
//! table.

use std::sync::Arc;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use localist_store::Store;

use crate::notify::{Notifier, Permission};
use crate::schedule;
use crate::settings::{ReminderSettings, ReminderTime};

/// Notification title
pub const REMINDER_TITLE: &str = "Rappel quotidien";

/// Notification body
pub const REMINDER_BODY: &str =
    "N'oubliez pas de consulter vos tâches et vos habitudes aujourd'hui!";

type Fallback = Arc<dyn Fn() + Send + Sync>;

/// Self-rescheduling daily reminder
pub struct DailyReminder {
    store: Store,
    notifier: Arc<dyn Notifier>,
    fallback: Option<Fallback>,
    settings: ReminderSettings,
    cancel: CancellationToken,
}

impl DailyReminder {
    /// Creates a scheduler, loading persisted settings and arming the timer
    /// when the reminder is enabled
    ///
    /// Must be called within a Tokio runtime when the persisted settings say
    /// enabled, since arming spawns the timer task.
    pub fn new(store: Store, notifier: Arc<dyn Notifier>) -> Self {
        let settings = ReminderSettings::load(&store);
        let mut reminder = Self {
            store,
            notifier,
            fallback: None,
            settings,
            cancel: CancellationToken::new(),
        };
        reminder.reschedule();
        reminder
    }

    /// Attaches a fallback invoked when notifications cannot be shown
    pub fn with_fallback(mut self, fallback: impl Fn() + Send + Sync + 'static) -> Self {
        self.fallback = Some(Arc::new(fallback));
        self.reschedule();
        self
    }

    /// Current settings
    pub fn settings(&self) -> ReminderSettings {
        self.settings
    }

    /// Enables or disables the reminder, persisting and rescheduling
    pub fn set_enabled(&mut self, enabled: bool) {
        self.settings.enabled = enabled;
        self.settings.save(&self.store);
        self.reschedule();
    }

    /// Changes the fire time, persisting and rescheduling
    pub fn set_time(&mut self, time: ReminderTime) {
        self.settings.time = time;
        self.settings.save(&self.store);
        self.reschedule();
    }

    /// Cancels the pending timer
    pub fn shutdown(&mut self) {
        self.cancel.cancel();
    }

    /// Cancels any pending timer and arms a fresh one when enabled
    fn reschedule(&mut self) {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();

        if !self.settings.enabled {
            return;
        }

        let cancel = self.cancel.clone();
        let notifier = Arc::clone(&self.notifier);
        let fallback = self.fallback.clone();
        let time = self.settings.time;

        tokio::spawn(async move {
            loop {
                let delay = schedule::delay_until_next(time);
                tracing::debug!(delay_secs = delay.as_secs(), %time, "daily reminder armed");
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = sleep(delay) => fire(notifier.as_ref(), fallback.as_deref()).await,
                }
            }
        });
    }
}

impl Drop for DailyReminder {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Delivers one reminder, honoring the permission flow
async fn fire(notifier: &dyn Notifier, fallback: Option<&(dyn Fn() + Send + Sync)>) {
    match notifier.permission().await {
        Permission::Granted => notifier.notify(REMINDER_TITLE, REMINDER_BODY).await,
        Permission::Undetermined => {
            if notifier.request_permission().await == Permission::Granted {
                notifier.notify(REMINDER_TITLE, REMINDER_BODY).await;
            } else {
                tracing::debug!("notification permission refused, using fallback");
                if let Some(fallback) = fallback {
                    fallback();
                }
            }
        }
        Permission::Denied => {
            if let Some(fallback) = fallback {
                fallback();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MockNotifier;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FallbackProbe {
        calls: Arc<AtomicUsize>,
    }

    impl FallbackProbe {
        fn new() -> (Self, Fallback) {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&calls);
            let hook: Fallback = Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            (Self { calls }, hook)
        }

        fn count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[tokio::test]
    async fn test_fire_with_granted_permission_notifies() {
        let mock = MockNotifier::new(Permission::Granted);
        let (probe, hook) = FallbackProbe::new();

        fire(&mock, Some(hook.as_ref())).await;

        let delivered = mock.delivered();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].0, REMINDER_TITLE);
        assert_eq!(probe.count(), 0);
    }

    #[tokio::test]
    async fn test_fire_with_denied_permission_falls_back() {
        let mock = MockNotifier::new(Permission::Denied);
        let (probe, hook) = FallbackProbe::new();

        fire(&mock, Some(hook.as_ref())).await;

        assert!(mock.delivered().is_empty());
        assert_eq!(probe.count(), 1);
    }

    #[tokio::test]
    async fn test_fire_undetermined_asks_then_notifies() {
        let mock = MockNotifier::new(Permission::Undetermined);
        let (probe, hook) = FallbackProbe::new();

        fire(&mock, Some(hook.as_ref())).await;

        assert_eq!(mock.delivered().len(), 1);
        assert_eq!(probe.count(), 0);
    }

    #[tokio::test]
    async fn test_fire_undetermined_refused_falls_back() {
        let mock = MockNotifier::denying_requests(Permission::Undetermined);
        let (probe, hook) = FallbackProbe::new();

        fire(&mock, Some(hook.as_ref())).await;

        assert!(mock.delivered().is_empty());
        assert_eq!(probe.count(), 1);
    }

    #[tokio::test]
    async fn test_fire_without_fallback_is_quiet() {
        let mock = MockNotifier::new(Permission::Denied);
        fire(&mock, None).await;
        assert!(mock.delivered().is_empty());
    }

    #[tokio::test]
    async fn test_settings_persist_through_scheduler() {
        let store = Store::in_memory();
        let notifier = Arc::new(MockNotifier::new(Permission::Granted));
        let mut reminder = DailyReminder::new(store.clone(), notifier);

        assert!(!reminder.settings().enabled);

        reminder.set_enabled(true);
        reminder.set_time(ReminderTime::new(21, 30).unwrap());

        let reloaded = ReminderSettings::load(&store);
        assert!(reloaded.enabled);
        assert_eq!(reloaded.time.to_string(), "21:30");

        reminder.shutdown();
    }

    #[tokio::test]
    async fn test_disable_cancels_pending_timer() {
        let store = Store::in_memory();
        let notifier = Arc::new(MockNotifier::new(Permission::Granted));
        let mut reminder = DailyReminder::new(store, notifier);

        reminder.set_enabled(true);
        let armed_token = reminder.cancel.clone();
        assert!(!armed_token.is_cancelled());

        reminder.set_enabled(false);
        assert!(armed_token.is_cancelled());
    }
}
