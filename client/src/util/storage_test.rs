use super::*;

#[test]
fn memory_store_round_trips_and_clears() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.load(), None);
    store.save("abc.def.ghi");
    assert_eq!(store.load().as_deref(), Some("abc.def.ghi"));
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_store_treats_blank_token_as_absent() {
    let store = MemoryTokenStore::with_token("   ");
    assert_eq!(store.load(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_store_is_empty_outside_browser() {
    let store = LocalTokenStore;
    store.save("abc.def.ghi");
    assert_eq!(store.load(), None);
    store.clear();
}
