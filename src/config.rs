//! Configuration for diskdash
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{DashError, Result};

/// Storage key the disk statistics are persisted under
pub const DEFAULT_STORAGE_KEY: &str = "diskStats";

/// Main configuration for an application state instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for persisted values
    /// Internal structure:
    ///   {data_dir}/
    ///     └── diskStats.json   (one file per storage key)
    pub data_dir: PathBuf,

    /// Key the disk statistics are stored under
    pub storage_key: String,

    /// Whether persistent storage is available at all
    pub persistence: Persistence,
}

/// Availability of persistent storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Load from and mirror to storage
    Enabled,

    /// No storage access; stores always start from defaults
    Disabled,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./diskdash_data"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            persistence: Persistence::Enabled,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config for values that can never work
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.is_empty() {
            return Err(DashError::Config("storage key must not be empty".to_string()));
        }
        if self.persistence == Persistence::Enabled && self.data_dir.as_os_str().is_empty() {
            return Err(DashError::Config(
                "data directory must be set when persistence is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all persisted values)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the key the disk statistics are stored under
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }

    /// Enable or disable persistent storage
    pub fn persistence(mut self, persistence: Persistence) -> Self {
        self.config.persistence = persistence;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
