//! File-backed storage
//!
//! One file per key under a data directory, the on-disk analog of a browser's
//! origin-scoped storage. Keys map to file names by replacing `:` with `_`,
//! so `synth:users` lands in `synth_users.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{StorageBackend, StorageError};

/// Storage backend persisting each key to its own file
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Opens a backend rooted at `dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "opened file storage");
        Ok(Self { dir })
    }

    /// Returns the directory this backend persists into
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key.replace(':', "_")))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(tmp.path()).unwrap();
        backend.set("synth:users", "[]").unwrap();
        assert_eq!(backend.get("synth:users").as_deref(), Some("[]"));
    }

    #[test]
    fn test_key_maps_to_sanitized_file_name() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(tmp.path()).unwrap();
        backend.set("habit-tracker:2026-08-06", "[]").unwrap();
        assert!(tmp.path().join("habit-tracker_2026-08-06.json").exists());
    }

    #[test]
    fn test_get_missing_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(tmp.path()).unwrap();
        assert_eq!(backend.get("missing"), None);
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(tmp.path()).unwrap();
        assert!(backend.remove("missing").is_ok());
    }

    #[test]
    fn test_reopen_sees_previous_writes() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let backend = FileBackend::new(tmp.path()).unwrap();
            backend.set("k", "persisted").unwrap();
        }
        let backend = FileBackend::new(tmp.path()).unwrap();
        assert_eq!(backend.get("k").as_deref(), Some("persisted"));
    }
}
