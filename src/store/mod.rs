//! Store Module
//!
//! Reactive containers the rendering layer subscribes to.
//!
//! ## Responsibilities
//! - Hold a single value and hand out snapshots
//! - Deliver the current value to new observers immediately
//! - Notify every observer synchronously, in registration order, on replacement
//! - Stay usable when an observer writes back into the same store
//!
//! ## Stores
//! ```text
//!   ┌──────────────────┐        ┌──────────────────┐
//!   │  DiskStatsStore  │        │     UiStore      │
//!   │ Writable<Vec<..>>│        │ Writable<String> │
//!   │ + persist hook   │        │ Writable<bool>   │
//!   └────────┬─────────┘        └──────────────────┘
//!            │
//!            ▼
//!   ┌──────────────────┐
//!   │ KeyValueStorage  │
//!   └──────────────────┘
//! ```

mod writable;
mod disk;
mod ui;

pub use writable::{Subscription, Writable};
pub use disk::{default_disk_stats, DiskStatsStore};
pub use ui::{find_tab, UiStore, DEFAULT_TAB, TABS};
