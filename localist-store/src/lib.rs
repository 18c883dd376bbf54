//! # Localist Store
//!
//! This crate is the data layer of localist: a local-first to-do list backend
//! where all persistence goes through a string key-value store standing in for
//! a remote database.
//!
//! ## Module Organization
//!
//! - `storage`: Storage backend trait with memory and file implementations
//! - `store`: The record store (JSON arrays keyed by string)
//! - `events`: Change feed published on every store write
//! - `models`: Entity records and their CRUD operations
//! - `auth`: Identity, sessions, and password hashing
//! - `habits`: Per-day habit checklist
//! - `config`: Configuration management
//! - `keys`: The persisted key layout

pub mod auth;
pub mod config;
pub mod events;
pub mod habits;
pub mod keys;
pub mod models;
pub mod storage;
pub mod store;

pub use events::{ChangeFeed, StoreChange};
pub use storage::{FileBackend, MemoryBackend, StorageBackend};
pub use store::Store;

/// Current version of the localist store library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
