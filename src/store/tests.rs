//! Unit tests for the in-memory and file-backed stores.

use chrono::{TimeZone, Utc};
use tempfile::NamedTempFile;

use super::*;

fn item(secs: i64) -> Item {
    Item::new(Utc.timestamp_opt(secs, 0).unwrap())
}

#[test]
fn memory_insert_and_enumerate() {
    let mut store = MemoryStore::new();
    assert!(store.is_empty().unwrap());

    store.insert(item(10)).unwrap();
    store.insert(item(20)).unwrap();

    let items = store.items().unwrap();
    assert_eq!(store.len().unwrap(), 2);
    assert_eq!(items[0], item(10));
    assert_eq!(items[1], item(20));
}

#[test]
fn memory_handles_share_rows() {
    let mut writer = MemoryStore::new();
    let reader = writer.clone();

    writer.insert(item(1)).unwrap();
    assert_eq!(reader.len().unwrap(), 1);
    assert_eq!(reader.items().unwrap()[0], item(1));
}

#[test]
fn disk_append_and_load() {
    let tmp = NamedTempFile::new().unwrap();
    let mut store = DiskStore::open(tmp.path()).unwrap();

    store.append(&item(100)).unwrap();
    store.append(&item(200)).unwrap();
    store.flush().unwrap();

    let items = store.load().unwrap();
    assert_eq!(items, vec![item(100), item(200)]);
}

#[test]
fn disk_reopen_resumes_appending() {
    let tmp = NamedTempFile::new().unwrap();
    {
        let mut store = DiskStore::open(tmp.path()).unwrap();
        store.append(&item(1)).unwrap();
        store.flush().unwrap();
    }

    let mut store = DiskStore::open(tmp.path()).unwrap();
    assert_eq!(store.len().unwrap(), 1);

    store.insert(item(2)).unwrap();
    assert_eq!(store.items().unwrap(), vec![item(1), item(2)]);
}

#[test]
fn disk_preserves_subsecond_precision() {
    let tmp = NamedTempFile::new().unwrap();
    let mut store = DiskStore::open(tmp.path()).unwrap();

    let precise = Item::new(Utc.timestamp_opt(1_756_339_200, 123_456_789).unwrap());
    store.append(&precise).unwrap();

    assert_eq!(store.load().unwrap()[0].timestamp, precise.timestamp);
}
