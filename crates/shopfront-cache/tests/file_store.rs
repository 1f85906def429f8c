//! File-backed cache behavior across process-like reopen cycles.

use serde::{Deserialize, Serialize};
use shopfront_cache::{cache_key, Cache, FileStore, KeyValueStore};
use std::fs;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Line {
    id: String,
    quantity: u32,
}

#[test]
fn test_values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let key = cache_key!("shopfront", "cart");

    {
        let cache = Cache::new(FileStore::open(&path).unwrap());
        let lines = vec![Line { id: "tee:M:_".into(), quantity: 2 }];
        cache.set(&key, &lines).unwrap();
        cache.set("shopfront:currency", "EUR").unwrap();
    }

    let cache = Cache::new(FileStore::open(&path).unwrap());
    let lines: Vec<Line> = cache.get(&key).unwrap().unwrap();
    assert_eq!(lines, vec![Line { id: "tee:M:_".into(), quantity: 2 }]);
    let currency: String = cache.get("shopfront:currency").unwrap().unwrap();
    assert_eq!(currency, "EUR");
}

#[test]
fn test_nested_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("state.json");

    let cache = Cache::new(FileStore::open(&path).unwrap());
    cache.set("k", &1).unwrap();
    assert!(path.exists());
}

#[test]
fn test_corrupt_document_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "not json at all").unwrap();

    let cache = Cache::new(FileStore::open(&path).unwrap());
    assert!(cache.keys().unwrap().is_empty());

    cache.set("k", &"v").unwrap();
    assert_eq!(cache.get::<String>("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn test_malformed_value_is_reported_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("state.json")).unwrap();
    store.set_raw("good", "[1,2]").unwrap();
    store.set_raw("bad", "[1,").unwrap();

    let cache = Cache::new(store);
    assert_eq!(cache.get::<Vec<u8>>("good").unwrap(), Some(vec![1, 2]));
    let err = cache.get::<Vec<u8>>("bad").unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_delete_and_exists() {
    let dir = tempfile::tempdir().unwrap();
    let cache = Cache::new(FileStore::open(dir.path().join("state.json")).unwrap());

    cache.set("k", &true).unwrap();
    assert!(cache.exists("k").unwrap());
    cache.delete("k").unwrap();
    assert!(!cache.exists("k").unwrap());
    cache.delete("k").unwrap();
}
