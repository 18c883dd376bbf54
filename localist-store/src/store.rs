//! The record store
//!
//! Collections are flat JSON arrays keyed by string; scalar values (the
//! current-user pointer, reminder settings) are plain strings. Every
//! operation is a synchronous read or write of a whole value — no partial
//! updates, no transactions, no indices. Repositories read the relevant
//! array, filter or mutate in memory, and write the array back.
//!
//! Availability beats correctness on the read path: missing or malformed
//! data degrades to the empty collection, and a failed write is logged and
//! swallowed rather than surfaced.
//!
//! # Example
//!
//! ```
//! use localist_store::Store;
//!
//! let store = Store::in_memory();
//! store.write_array("synth:users", &["alice", "bob"]);
//!
//! let names: Vec<String> = store.read_array("synth:users");
//! assert_eq!(names, vec!["alice", "bob"]);
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::broadcast;

use crate::config::Config;
use crate::events::{ChangeFeed, StoreChange};
use crate::storage::{FileBackend, MemoryBackend, StorageBackend};

/// Shared handle to the key-value record store
///
/// Cheap to clone; clones share the backend and the change feed.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
    feed: ChangeFeed,
}

impl Store {
    /// Creates a store over an arbitrary backend
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            feed: ChangeFeed::new(),
        }
    }

    /// Creates a store over a fresh in-memory backend
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Opens a file-backed store at the configured data directory
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(config: &Config) -> anyhow::Result<Self> {
        let backend = FileBackend::new(&config.data_dir)?;
        Ok(Self::new(Arc::new(backend)))
    }

    /// Reads the collection stored under `key`
    ///
    /// Returns the empty vec when the key is missing or holds data that does
    /// not parse as an array of `T`. Never fails; corruption is logged at
    /// `warn` and treated as an empty collection.
    pub fn read_array<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.backend.get(key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(key, %err, "malformed collection, reading as empty");
                Vec::new()
            }
        }
    }

    /// Serializes `items` and persists the collection under `key`
    ///
    /// A backend failure is logged and swallowed; the previous value stays in
    /// place. Publishes a change on success.
    pub fn write_array<T: Serialize>(&self, key: &str, items: &[T]) {
        let json = match serde_json::to_string(items) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(key, %err, "failed to serialize collection, write dropped");
                return;
            }
        };
        match self.backend.set(key, &json) {
            Ok(()) => self.feed.publish(key),
            Err(err) => tracing::warn!(key, %err, "storage write failed, write dropped"),
        }
    }

    /// Reads the scalar string stored under `key`
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.backend.get(key)
    }

    /// Stores a scalar string under `key`, publishing a change on success
    pub fn set_string(&self, key: &str, value: &str) {
        match self.backend.set(key, value) {
            Ok(()) => self.feed.publish(key),
            Err(err) => tracing::warn!(key, %err, "storage write failed, write dropped"),
        }
    }

    /// Removes `key`, publishing a change on success
    ///
    /// Removing a missing key still publishes; subscribers re-fetch and see
    /// the same absent state either way.
    pub fn remove(&self, key: &str) {
        match self.backend.remove(key) {
            Ok(()) => self.feed.publish(key),
            Err(err) => tracing::warn!(key, %err, "storage remove failed"),
        }
    }

    /// Subscribes to the change feed
    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.feed.subscribe()
    }
}
