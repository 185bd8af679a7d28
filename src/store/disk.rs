//! Disk statistics store
//!
//! Holds the dashboard's disk records and mirrors every replacement into
//! key-value storage.

use std::sync::Arc;

use crate::storage::KeyValueStorage;
use crate::types::DiskRecord;

use super::{Subscription, Writable};

/// Records shown when nothing usable is stored
pub fn default_disk_stats() -> Vec<DiskRecord> {
    vec![
        DiskRecord::new("System (C:)", 85.0, 500.0, "from-emerald-500 to-green-600"),
        DiskRecord::new("Data (D:)", 120.0, 1000.0, "from-green-500 to-emerald-600"),
        DiskRecord::new("Backup (E:)", 45.0, 250.0, "from-teal-500 to-green-500"),
    ]
}

/// Persisted list of disk records
///
/// ## Persistence
/// - On open, the list under `key` is loaded; an absent, unreadable or
///   malformed value falls back to [`default_disk_stats`]
/// - Without storage the defaults are used and storage is never touched
/// - A persistence observer writes the whole list as a JSON array once on
///   open and once per replacement
pub struct DiskStatsStore {
    /// The records (full-list replacement only)
    records: Writable<Vec<DiskRecord>>,

    /// Storage the records are mirrored to, if available
    storage: Option<Arc<dyn KeyValueStorage>>,

    /// Key the records are stored under
    key: String,

    /// Keeps the persistence observer registered
    _persist: Option<Subscription>,
}

impl DiskStatsStore {
    /// Load the records and attach the persistence hook
    pub fn open(storage: Option<Arc<dyn KeyValueStorage>>, key: impl Into<String>) -> Self {
        let key = key.into();

        let initial = match &storage {
            Some(storage) => Self::load(storage.as_ref(), &key),
            None => {
                tracing::debug!(key = %key, "no persistent storage; using default disk stats");
                default_disk_stats()
            }
        };

        let records = Writable::new(initial);

        let persist = storage.as_ref().map(|storage| {
            let storage = Arc::clone(storage);
            let key = key.clone();
            records.subscribe(move |records: &Vec<DiskRecord>| {
                Self::persist(storage.as_ref(), &key, records)
            })
        });

        Self {
            records,
            storage,
            key,
            _persist: persist,
        }
    }

    /// Register an observer (called now and after every replacement)
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&Vec<DiskRecord>) + Send + Sync + 'static,
    {
        self.records.subscribe(observer)
    }

    /// Replace the whole list
    pub fn set(&self, records: Vec<DiskRecord>) {
        self.records.set(records);
    }

    /// Replace the whole list with one derived from the current list
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&Vec<DiskRecord>) -> Vec<DiskRecord>,
    {
        self.records.update(f);
    }

    /// Snapshot of the current list
    pub fn get(&self) -> Vec<DiskRecord> {
        self.records.get()
    }

    /// Restore the built-in records
    pub fn reset(&self) {
        self.records.set(default_disk_stats());
    }

    /// Underlying reactive container
    pub fn writable(&self) -> &Writable<Vec<DiskRecord>> {
        &self.records
    }

    /// Whether replacements are mirrored to storage
    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    /// Key the records are stored under
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn load(storage: &dyn KeyValueStorage, key: &str) -> Vec<DiskRecord> {
        let raw = match storage.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key, "no stored disk stats; using defaults");
                return default_disk_stats();
            }
            Err(e) => {
                tracing::debug!(key, error = %e, "could not read stored disk stats; using defaults");
                return default_disk_stats();
            }
        };

        match serde_json::from_str::<Vec<DiskRecord>>(&raw) {
            Ok(records) => {
                tracing::debug!(key, count = records.len(), "loaded disk stats");
                records
            }
            Err(e) => {
                tracing::debug!(key, error = %e, "stored disk stats are malformed; using defaults");
                default_disk_stats()
            }
        }
    }

    fn persist(storage: &dyn KeyValueStorage, key: &str, records: &[DiskRecord]) {
        // JSON has no NaN/inf: they encode as null and the list won't load back
        if let Some(bad) = records
            .iter()
            .find(|r| !r.used.is_finite() || !r.total.is_finite())
        {
            tracing::warn!(
                key,
                disk = %bad.name,
                "non-finite disk value; stored list will fall back to defaults on next load"
            );
        }

        let encoded = match serde_json::to_string(records) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to encode disk stats");
                return;
            }
        };

        if let Err(e) = storage.set_item(key, &encoded) {
            tracing::warn!(key, error = %e, "failed to persist disk stats");
        }
    }
}

impl std::fmt::Debug for DiskStatsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiskStatsStore")
            .field("records", &self.records)
            .field("key", &self.key)
            .field("persistent", &self.is_persistent())
            .finish()
    }
}
