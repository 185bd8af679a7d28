//! Storage Module
//!
//! Durable key-value storage the persisted stores mirror into.
//!
//! ## Responsibilities
//! - Read and write string values under string keys
//! - Hide where values live (memory for tests, files for the dashboard)
//!
//! ## Layout (FileStorage)
//! ```text
//!   {data_dir}/
//!     ├── diskStats.json
//!     └── <key>.json         (one file per key, whole value per file)
//! ```

mod memory;
mod file;

pub use memory::MemoryStorage;
pub use file::FileStorage;

use crate::error::Result;

/// Durable key-value storage scoped to one application
///
/// Values are opaque strings; callers own the encoding.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}
