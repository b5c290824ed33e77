// src/core/storage/mod.rs

pub mod collection;
pub mod defaults;
pub mod keys;
pub mod store;

// Re-export the store seam and adapter for easier access
pub use collection::{load_or_seed, save_collection};
pub use store::{new_shared_store, KeyValueStore, MemoryStore, SharedStore};
