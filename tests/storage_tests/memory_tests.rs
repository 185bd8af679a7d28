//! Tests for MemoryStorage

use diskdash::storage::{KeyValueStorage, MemoryStorage};

#[test]
fn test_new_storage_is_empty() {
    let storage = MemoryStorage::new();

    assert!(storage.is_empty());
    assert_eq!(storage.write_count(), 0);
    assert_eq!(storage.get_item("diskStats").unwrap(), None);
}

#[test]
fn test_set_and_get() {
    let storage = MemoryStorage::new();

    storage.set_item("diskStats", "[]").unwrap();

    assert_eq!(storage.get_item("diskStats").unwrap(), Some("[]".to_string()));
    assert_eq!(storage.len(), 1);
}

#[test]
fn test_set_overwrites_and_counts_writes() {
    let storage = MemoryStorage::new();

    storage.set_item("k", "one").unwrap();
    storage.set_item("k", "two").unwrap();

    assert_eq!(storage.get_item("k").unwrap(), Some("two".to_string()));
    assert_eq!(storage.write_count(), 2);
    assert_eq!(storage.len(), 1);
}

#[test]
fn test_remove_item() {
    let storage = MemoryStorage::with_items([("a", "1"), ("b", "2")]);

    storage.remove_item("a").unwrap();
    storage.remove_item("missing").unwrap();

    assert_eq!(storage.get_item("a").unwrap(), None);
    assert_eq!(storage.get_item("b").unwrap(), Some("2".to_string()));
}

#[test]
fn test_with_items_does_not_count_writes() {
    let storage = MemoryStorage::with_items([("a", "1")]);

    assert_eq!(storage.write_count(), 0);
    assert_eq!(storage.len(), 1);
}
