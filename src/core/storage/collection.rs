// src/core/storage/collection.rs
use crate::storage::store::SharedStore;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Loads an ordered collection from `key`, reseeding with `defaults` when
/// storage is absent, unparsable, or holds an empty list. Reseeding writes
/// the defaults back immediately (self-healing). Callers invoke this once
/// at startup only: a list the admin empties during the session is saved
/// as `[]` and must not be reseeded until the next load.
pub fn load_or_seed<T>(store: &SharedStore, key: &str, defaults: &[T]) -> Vec<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    if let Some(raw) = store.borrow().get(key) {
        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) if !items.is_empty() => return items,
            Ok(_) => {}
            Err(err) => warn!("failed to parse collection under {key}: {err}"),
        }
    }
    let items = defaults.to_vec();
    save_collection(store, key, &items);
    items
}

/// Serializes and stores the collection unconditionally, overwriting any
/// previous value under `key`.
pub fn save_collection<T: Serialize>(store: &SharedStore, key: &str, items: &[T]) {
    match serde_json::to_string(items) {
        Ok(json) => store.borrow_mut().set(key, &json),
        Err(err) => warn!("failed to serialize collection under {key}: {err}"),
    }
}
