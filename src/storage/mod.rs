// src/storage/mod.rs
//
// Durable key-value storage
//
// PRINCIPLES:
// - String values in, string values out; callers own the encoding
// - A missing key is `Ok(None)`, never an error
// - Writes are synchronous and overwrite prior content

pub mod file_store;
pub mod memory_store;

pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;

use crate::error::AppResult;

/// Persistent key-value store surviving process restarts
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
}
