use super::*;

#[test]
fn memory_storage_round_trips_values() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());
    store.set_item("k", "v").unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("v"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_storage_overwrites_existing_key() {
    let store = MemoryStorage::new();
    store.set_item("k", "old").unwrap();
    store.set_item("k", "new").unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("new"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_storage_remove_is_idempotent() {
    let store = MemoryStorage::new();
    store.set_item("k", "v").unwrap();
    store.remove_item("k");
    store.remove_item("k");
    assert!(store.get_item("k").is_none());
    assert!(store.is_empty());
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_natively() {
    let store = BrowserStorage;
    assert!(store.get_item("accessToken").is_none());
    assert_eq!(store.set_item("accessToken", "t"), Err(StorageError::Unavailable));
    store.remove_item("accessToken");
}
