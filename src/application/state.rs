// src/application/state.rs

use std::sync::Arc;

use crate::config::RocketHubConfig;
use crate::error::AppResult;
use crate::integrations::{RocketApi, SpaceXClient};
use crate::repositories::{CustomRocketRepository, StoredCustomRocketRepository};
use crate::services::RocketRepository;
use crate::storage::{FileKeyValueStore, KeyValueStore};

/// Application state shared by command handlers.
/// The repository is Arc-wrapped for sharing across tasks.
pub struct AppState {
    pub rocket_repository: Arc<RocketRepository>,
}

impl AppState {
    /// Wire the production stack: SpaceX client + file-backed storage
    pub fn initialize(config: RocketHubConfig) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::open(&config.data_dir)?);
        let api: Arc<dyn RocketApi> = Arc::new(SpaceXClient::from_config(&config)?);

        // 2. REPOSITORIES
        let custom_repo: Arc<dyn CustomRocketRepository> =
            Arc::new(StoredCustomRocketRepository::new(store));

        // 3. STATE CONTAINER
        let rocket_repository = Arc::new(RocketRepository::new(api, custom_repo));

        Ok(Self { rocket_repository })
    }
}
