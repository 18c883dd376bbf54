//! Storage backends
//!
//! The store persists through a string key-value seam so the medium can be
//! swapped without touching any repository code. Two backends ship:
//!
//! - [`MemoryBackend`]: process-local map, the default for tests
//! - [`FileBackend`]: one file per key under a data directory
//!
//! Backends are deliberately dumb: no transactions, no locking beyond their
//! own interior mutability, no partial updates. Callers read a whole value,
//! mutate in memory, and write the whole value back; concurrent writers are
//! last-write-wins.

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Error type for storage backend operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying I/O failure (file backend only)
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// String key-value storage seam
///
/// A missing key reads as `None`; reads never fail. Writes and removals may
/// fail on fallible media, and it is the caller's choice whether to surface
/// or swallow that.
pub trait StorageBackend: Send + Sync {
    /// Returns the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
