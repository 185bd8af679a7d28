//! Tests for AppState and Config
//!
//! These tests verify:
//! - Config defaults, builder and validation
//! - Opening state with and without persistence
//! - Disk stats surviving a restart while UI state resets

use std::fs;
use std::sync::Arc;

use diskdash::config::DEFAULT_STORAGE_KEY;
use diskdash::storage::{KeyValueStorage, MemoryStorage};
use diskdash::store::default_disk_stats;
use diskdash::{
    AppState, Config, DashError, DiskRecord, DriveSpace, FileTypeItem, FolderItem, Persistence,
    RecentFile,
};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_state() -> (TempDir, Config, AppState) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp_dir.path()).build();
    let state = AppState::open(&config).unwrap();
    (temp_dir, config, state)
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.storage_key, "diskStats");
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(config.persistence, Persistence::Enabled);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_rejects_empty_key() {
    let config = Config::builder().storage_key("").build();

    assert!(matches!(config.validate(), Err(DashError::Config(_))));
    assert!(AppState::open(&config).is_err());
}

#[test]
fn test_config_rejects_empty_data_dir_when_persisting() {
    let config = Config::builder().data_dir("").build();
    assert!(matches!(config.validate(), Err(DashError::Config(_))));

    let config = Config::builder()
        .data_dir("")
        .persistence(Persistence::Disabled)
        .build();
    assert!(config.validate().is_ok());
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_fresh_directory() {
    let (temp, _config, state) = setup_temp_state();

    assert_eq!(state.disks().get(), default_disk_stats());
    assert_eq!(state.ui().active_tab.get(), "dashboard");
    assert!(!state.ui().is_scanning.get());
    assert!(temp.path().join("diskStats.json").exists());
}

#[test]
fn test_disks_persist_across_restart_and_ui_resets() {
    let (_temp, config, state) = setup_temp_state();
    let records = vec![DiskRecord::new("Only (Z:)", 1.0, 2.0, "c")];

    state.disks().set(records.clone());
    state.ui().active_tab.set("analytics".to_string());
    state.ui().is_scanning.set(true);
    drop(state);

    let reopened = AppState::open(&config).unwrap();

    assert_eq!(reopened.disks().get(), records);
    assert_eq!(reopened.ui().active_tab.get(), "dashboard");
    assert!(!reopened.ui().is_scanning.get());
}

#[test]
fn test_open_with_malformed_file_falls_back() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("diskStats.json"), "[{oops").unwrap();
    let config = Config::builder().data_dir(temp.path()).build();

    let state = AppState::open(&config).unwrap();

    assert_eq!(state.disks().get(), default_disk_stats());
}

#[test]
fn test_open_without_persistence_touches_nothing() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("unused");
    let config = Config::builder()
        .data_dir(&data_dir)
        .persistence(Persistence::Disabled)
        .build();

    let state = AppState::open(&config).unwrap();
    state.disks().set(Vec::new());

    assert!(!state.disks().is_persistent());
    assert!(!data_dir.exists());
}

#[test]
fn test_with_injected_storage() {
    let storage = Arc::new(MemoryStorage::new());
    let dyn_storage: Arc<dyn KeyValueStorage> = storage.clone();

    let state = AppState::with_storage(Some(dyn_storage), "stats");
    state.disks().reset();

    assert_eq!(state.disks().storage_key(), "stats");
    assert_eq!(storage.write_count(), 2);
}

// =============================================================================
// DiskRecord Tests
// =============================================================================

#[test]
fn test_disk_record_helpers() {
    let record = DiskRecord::new("System (C:)", 85.0, 500.0, "c");

    assert_eq!(record.free(), 415.0);
    assert!((record.usage_percent() - 17.0).abs() < 1e-9);
}

#[test]
fn test_disk_record_zero_total() {
    let record = DiskRecord::new("Empty", 10.0, 0.0, "c");

    assert_eq!(record.usage_percent(), 0.0);
    assert_eq!(record.free(), -10.0);
}

#[test]
fn test_disk_record_json_field_names() {
    let json = serde_json::to_value(DiskRecord::new("Data (D:)", 120.0, 1000.0, "g")).unwrap();

    assert_eq!(json["name"], "Data (D:)");
    assert_eq!(json["used"], 120.0);
    assert_eq!(json["total"], 1000.0);
    assert_eq!(json["color"], "g");
}

// =============================================================================
// Dashboard Item Tests
// =============================================================================

#[test]
fn test_drive_space_used_and_record() {
    let gb = 1024u64 * 1024 * 1024;
    let drive = DriveSpace {
        letter: "C:\\".to_string(),
        name: "System".to_string(),
        total: 500 * gb,
        free: 415 * gb,
    };

    assert_eq!(drive.used(), 85 * gb);

    let record = drive.to_record("c");
    assert_eq!(record, DiskRecord::new("System (C:\\)", 85.0, 500.0, "c"));
}

#[test]
fn test_drive_space_edge_cases() {
    let drive = DriveSpace {
        letter: "/mnt".to_string(),
        name: String::new(),
        total: 10,
        free: 20,
    };

    assert_eq!(drive.used(), 0);
    assert_eq!(drive.to_record("c").name, "/mnt");
}

#[test]
fn test_dashboard_items_use_type_field() {
    let file: RecentFile = serde_json::from_str(
        r#"{"name":"movie.mkv","size":"4.2 GB","type":"video","path":"D:/Videos/movie.mkv"}"#,
    )
    .unwrap();
    assert_eq!(file.kind, "video");

    let item = FileTypeItem {
        kind: "images".to_string(),
        size: "12 GB".to_string(),
        color: "bg-green-500".to_string(),
    };
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["type"], "images");
    assert!(json.get("kind").is_none());

    let folder: FolderItem = serde_json::from_str(r#"{"folder":"Downloads","size":"30 GB"}"#).unwrap();
    assert_eq!(folder, FolderItem { folder: "Downloads".to_string(), size: "30 GB".to_string() });
}
