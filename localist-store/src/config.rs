//! Configuration management
//!
//! Configuration comes from environment variables, with `.env` support for
//! development. Everything has a default: a store opened with no environment
//! at all lands in the platform data directory.
//!
//! # Environment Variables
//!
//! - `LOCALIST_DATA_DIR`: directory the file backend persists into
//!   (default: the platform data dir, e.g. `~/.local/share/localist`)

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the file backend persists into
    pub data_dir: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error only when no data dir is configured and the platform
    /// data directory cannot be resolved.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let data_dir = match env::var("LOCALIST_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_data_dir()?,
        };

        Ok(Self { data_dir })
    }
}

fn default_data_dir() -> anyhow::Result<PathBuf> {
    let dirs = ProjectDirs::from("dev", "localist", "localist")
        .ok_or_else(|| anyhow::anyhow!("unable to resolve a platform data directory"))?;
    Ok(dirs.data_dir().to_path_buf())
}
