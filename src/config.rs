//! Project configuration
//!
//! An optional `.nextup.toml` in the working directory can pin the task
//! file location and the default listing order:
//!
//! ```toml
//! [storage]
//! file = "tasks.json"
//!
//! [display]
//! order = "priority"
//! ```
//!
//! Loading is tolerant: a missing or unreadable file falls back to the
//! defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::storage::DEFAULT_TASKS_FILE;

/// Project configuration file name
pub const CONFIG_FILE: &str = ".nextup.toml";

/// Project-level nextup configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Task file path (relative paths resolve against the working directory)
    #[serde(default = "default_file")]
    pub file: String,
}

fn default_file() -> String {
    DEFAULT_TASKS_FILE.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
        }
    }
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Default sort order for listing: "priority" or "date"
    #[serde(default = "default_order")]
    pub order: String,
}

fn default_order() -> String {
    "priority".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            order: default_order(),
        }
    }
}

impl Config {
    /// Load config from `dir`, or defaults if missing or unreadable
    #[must_use]
    pub fn load_from(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Load config from the current working directory
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new("."))
    }
}
