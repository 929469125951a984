// src/repositories/custom_rocket_repository.rs
//
// Persistence of user-authored rockets
//
// The whole sequence lives under a single storage key as a JSON array,
// most recent first. Saving always rewrites the full array.

use std::sync::Arc;

use log::debug;

use crate::domain::Rocket;
use crate::error::{AppError, AppResult};
use crate::storage::KeyValueStore;

/// Storage key holding the JSON array of custom rockets
pub const STORAGE_KEY: &str = "rockets-data";

#[cfg_attr(test, mockall::automock)]
pub trait CustomRocketRepository: Send + Sync {
    /// Load the persisted sequence; an absent key yields an empty one
    fn load_all(&self) -> AppResult<Vec<Rocket>>;

    /// Replace the persisted sequence
    fn save_all(&self, rockets: &[Rocket]) -> AppResult<()>;
}

pub struct StoredCustomRocketRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoredCustomRocketRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl CustomRocketRepository for StoredCustomRocketRepository {
    fn load_all(&self) -> AppResult<Vec<Rocket>> {
        let Some(raw) = self.store.get_item(STORAGE_KEY)? else {
            return Ok(Vec::new());
        };

        let rockets: Vec<Rocket> = serde_json::from_str(&raw).map_err(|e| {
            AppError::ParseFailed(format!("Stored custom rockets are invalid: {}", e))
        })?;

        debug!("Loaded {} custom rockets from storage", rockets.len());
        Ok(rockets)
    }

    fn save_all(&self, rockets: &[Rocket]) -> AppResult<()> {
        let raw = serde_json::to_string(rockets)
            .map_err(|e| AppError::Storage(format!("Failed to encode custom rockets: {}", e)))?;

        self.store.set_item(STORAGE_KEY, &raw)?;

        debug!("Saved {} custom rockets to storage", rockets.len());
        Ok(())
    }
}
