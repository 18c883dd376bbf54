//! Change feed
//!
//! Every write through the [`Store`](crate::store::Store) publishes a
//! [`StoreChange`] naming the key that changed — key name only, no diff.
//! Consumers are expected to re-fetch whatever state they derive from that
//! key. This is an explicit publish/subscribe channel rather than a
//! storage-medium side effect, so components can subscribe without caring
//! what the store writes to.
//!
//! Staleness, not races: a subscriber that refreshes on every change still
//! observes last-write-wins over concurrent read-modify-write cycles.

use tokio::sync::broadcast;

use crate::keys;

/// Capacity of the change channel; slow subscribers lag past this
const CHANNEL_CAPACITY: usize = 256;

/// A single store change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    /// The key that was written or removed
    pub key: String,
}

impl StoreChange {
    /// True when the change touches a `synth:`-prefixed record collection
    ///
    /// Reminder settings and habit keys share the storage medium but live
    /// outside the record namespace; most subscribers only care about
    /// record changes.
    pub fn is_record_key(&self) -> bool {
        self.key.starts_with(keys::RECORD_PREFIX)
    }
}

/// Broadcast channel fanning out store changes to any number of subscribers
#[derive(Debug, Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<StoreChange>,
}

impl ChangeFeed {
    /// Creates a feed with no subscribers
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Subscribes to all subsequent changes
    ///
    /// Changes published before this call are not replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.sender.subscribe()
    }

    /// Publishes a change for `key`
    ///
    /// Having no subscribers is fine; the send error is ignored.
    pub(crate) fn publish(&self, key: &str) {
        let _ = self.sender.send(StoreChange {
            key: key.to_string(),
        });
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}
