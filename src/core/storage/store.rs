// src/core/storage/store.rs
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// The sole persistence substrate: a synchronous string-keyed store.
/// A browser host backs this with local storage; `MemoryStore` is the
/// in-crate implementation. Missing keys are not an error.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Shared handle to the store. The keyspace is partitioned by key per
/// manager, so sharing one store cannot let managers corrupt each other.
pub type SharedStore = Rc<RefCell<dyn KeyValueStore>>;

pub fn new_shared_store(store: impl KeyValueStore + 'static) -> SharedStore {
    Rc::new(RefCell::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_none_for_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("absent"), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut store = MemoryStore::new();
        store.set("k", "v");
        assert_eq!(store.get("k"), Some("v".to_string()));
        store.set("k", "v2");
        assert_eq!(store.get("k"), Some("v2".to_string()));
    }

    #[test]
    fn remove_clears_entry() {
        let mut store = MemoryStore::new();
        store.set("k", "v");
        store.remove("k");
        assert_eq!(store.get("k"), None);
        assert!(store.is_empty());
    }
}
