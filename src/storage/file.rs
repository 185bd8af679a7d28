//! File-backed storage
//!
//! One JSON file per key inside a data directory.
//!
//! Writes go to `{key}.json.tmp` first and are renamed over the real file,
//! so a crash mid-write leaves the previous value in place.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{DashError, Result};

use super::KeyValueStorage;

/// Storage rooted at a directory on the local filesystem
#[derive(Debug)]
pub struct FileStorage {
    /// Directory holding one file per key
    data_dir: PathBuf,

    /// Serializes writers so temp files are never shared
    write_lock: Mutex<()>,
}

impl FileStorage {
    // =========================================================================
    // Internal Path Constants
    // =========================================================================
    const EXTENSION: &'static str = "json";
    const TEMP_SUFFIX: &'static str = ".tmp";

    /// Open or create storage in the given directory
    pub fn open(path: &Path) -> Result<Self> {
        fs::create_dir_all(path)?;

        if !path.is_dir() {
            return Err(DashError::Storage(format!(
                "{} is not a directory",
                path.display()
            )));
        }

        tracing::debug!(dir = %path.display(), "opened file storage");

        Ok(Self {
            data_dir: path.to_path_buf(),
            write_lock: Mutex::new(()),
        })
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File a key is stored in
    ///
    /// "diskStats" → "{data_dir}/diskStats.json"
    pub fn item_path(&self, key: &str) -> Result<PathBuf> {
        Self::validate_key(key)?;
        Ok(self.data_dir.join(format!("{}.{}", key, Self::EXTENSION)))
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Write `value` to `temp` and rename it over `path`
    fn write_replace(temp: &Path, path: &Path, value: &str) -> std::io::Result<()> {
        let mut file = fs::File::create(temp)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        drop(file);
        fs::rename(temp, path)
    }

    /// Keys become file names and must not escape the data directory
    fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(DashError::Storage("empty storage key".to_string()));
        }
        if key == "." || key == ".." || key.contains(['/', '\\', '\0']) {
            return Err(DashError::Storage(format!("invalid storage key: {:?}", key)));
        }
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.item_path(key)?;
        let mut temp_name = path.clone().into_os_string();
        temp_name.push(Self::TEMP_SUFFIX);
        let temp_path = PathBuf::from(temp_name);

        let _guard = self.write_lock.lock();

        if let Err(e) = Self::write_replace(&temp_path, &path, value) {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                if cleanup.kind() != ErrorKind::NotFound {
                    tracing::debug!(
                        path = %temp_path.display(),
                        error = %cleanup,
                        "could not remove temp file"
                    );
                }
            }
            return Err(e.into());
        }

        tracing::trace!(key, bytes = value.len(), "stored item");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.item_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
