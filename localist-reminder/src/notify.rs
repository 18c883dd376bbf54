//! Notifier seam
//!
//! Delivering a native notification is platform work the scheduler should
//! not care about, so it goes through the [`Notifier`] trait. Permission is
//! a tri-state: it may already be granted or denied, or still undetermined,
//! in which case the scheduler asks once at fire time and respects the
//! answer. A [`MockNotifier`] ships as a real module for tests and demos.

use std::sync::Mutex;

use async_trait::async_trait;

/// Notification permission state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Notifications may be shown
    Granted,

    /// Notifications were refused; do not ask again
    Denied,

    /// The user has not been asked yet
    Undetermined,
}

/// Contract for delivering native notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Current permission state
    async fn permission(&self) -> Permission;

    /// Prompts for permission and returns the resulting state
    ///
    /// Only called when [`permission`](Notifier::permission) reports
    /// `Undetermined`.
    async fn request_permission(&self) -> Permission;

    /// Shows a notification
    async fn notify(&self, title: &str, body: &str);
}

/// Mock notifier recording every delivered notification
///
/// Configure the starting permission and whether a permission request is
/// granted; inspect [`delivered`](MockNotifier::delivered) afterwards.
#[derive(Debug)]
pub struct MockNotifier {
    permission: Mutex<Permission>,
    grant_on_request: bool,
    delivered: Mutex<Vec<(String, String)>>,
}

impl MockNotifier {
    /// Creates a mock in the given permission state that grants requests
    pub fn new(permission: Permission) -> Self {
        Self {
            permission: Mutex::new(permission),
            grant_on_request: true,
            delivered: Mutex::new(Vec::new()),
        }
    }

    /// Creates a mock that answers permission requests with a refusal
    pub fn denying_requests(permission: Permission) -> Self {
        Self {
            grant_on_request: false,
            ..Self::new(permission)
        }
    }

    /// Notifications delivered so far, as (title, body) pairs
    pub fn delivered(&self) -> Vec<(String, String)> {
        self.delivered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn permission(&self) -> Permission {
        *self.permission.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn request_permission(&self) -> Permission {
        let granted = if self.grant_on_request {
            Permission::Granted
        } else {
            Permission::Denied
        };
        *self.permission.lock().unwrap_or_else(|e| e.into_inner()) = granted;
        granted
    }

    async fn notify(&self, title: &str, body: &str) {
        self.delivered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((title.to_string(), body.to_string()));
    }
}
