//! # diskdash
//!
//! State layer for a disk-utility dashboard:
//! - Reactive stores with synchronous observer delivery
//! - Disk statistics mirrored to key-value storage as JSON
//! - Transient navigation state and static tab metadata
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Rendering Layer                            │
//! │            (subscribes, dispatches updates)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      AppState                                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌──────────────┐          ┌─────────────┐
//!   │DiskStatsStore│          │   UiStore   │
//!   │  (persisted) │          │ (transient) │
//!   └──────┬───────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌──────────────┐
//!   │KeyValueStore │
//!   │ (file / mem) │
//!   └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod types;
pub mod storage;
pub mod store;
pub mod state;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DashError, Result};
pub use config::{Config, Persistence};
pub use state::AppState;
pub use types::{DiskRecord, DriveSpace, FileTypeItem, FolderItem, RecentFile, TabDescriptor};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of diskdash
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
