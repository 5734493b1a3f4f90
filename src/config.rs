//! Configuration for the file-backed log helper.

use serde::Deserialize;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable read by [`LogFileConfig::from_env`]
pub const LOG_DIR_ENV: &str = "RUNAR_LOG_DIR";

const DEFAULT_LOG_DIR: &str = "logs";

/// Where [`append_to_file`](crate::fs::append_to_file) writes its `.log` files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogFileConfig {
    /// Directory holding the log files, created on first append
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_DIR)
}

impl Default for LogFileConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
        }
    }
}

impl LogFileConfig {
    /// Create a config rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read the directory from `RUNAR_LOG_DIR`, falling back to `./logs`
    pub fn from_env() -> Self {
        Self::from_var(env::var_os(LOG_DIR_ENV))
    }

    /// Build from the raw value of `RUNAR_LOG_DIR`; unset or empty means `./logs`
    pub fn from_var(value: Option<OsString>) -> Self {
        value
            .filter(|dir| !dir.is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Path of the log file for `name`
    pub fn log_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.log"))
    }

    /// Directory holding the log files
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
