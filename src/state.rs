//! Application state
//!
//! Builds the stores once at startup and hands them to the rendering layer.
//!
//! ## Responsibilities
//! - Pick the storage backend from the config
//! - Load the persisted disk stats (or defaults)
//! - Create the transient UI store

use std::sync::Arc;

use crate::config::{Config, Persistence};
use crate::error::Result;
use crate::storage::{FileStorage, KeyValueStorage};
use crate::store::{DiskStatsStore, UiStore};

/// Stores shared by every view of the dashboard
#[derive(Debug)]
pub struct AppState {
    /// Persisted disk records
    disks: DiskStatsStore,

    /// Navigation and scan flag
    ui: UiStore,
}

impl AppState {
    /// Open the state described by `config`
    ///
    /// On startup:
    /// 1. Validate the config
    /// 2. Open file storage in `data_dir` (skipped when persistence is disabled)
    /// 3. Load disk stats from storage or defaults
    /// 4. Create the UI store with its defaults
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;

        let storage: Option<Arc<dyn KeyValueStorage>> = match config.persistence {
            Persistence::Enabled => Some(Arc::new(FileStorage::open(&config.data_dir)?)),
            Persistence::Disabled => None,
        };

        tracing::info!(
            persistence = ?config.persistence,
            data_dir = %config.data_dir.display(),
            "opening dashboard state"
        );

        Ok(Self::with_storage(storage, &config.storage_key))
    }

    /// Build the state around an already opened storage backend
    pub fn with_storage(storage: Option<Arc<dyn KeyValueStorage>>, key: &str) -> Self {
        Self {
            disks: DiskStatsStore::open(storage, key),
            ui: UiStore::new(),
        }
    }

    /// Disk statistics store
    pub fn disks(&self) -> &DiskStatsStore {
        &self.disks
    }

    /// UI navigation store
    pub fn ui(&self) -> &UiStore {
        &self.ui
    }
}
