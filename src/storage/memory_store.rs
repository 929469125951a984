// src/storage/memory_store.rs

use std::collections::HashMap;
use std::sync::RwLock;

use super::KeyValueStore;
use crate::error::{AppError, AppResult};

/// In-process store, for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryKeyValueStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let items = self
            .items
            .read()
            .map_err(|e| AppError::Storage(e.to_string()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| AppError::Storage(e.to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
