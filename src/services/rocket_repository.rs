// src/services/rocket_repository.rs
//
// Rocket state container
//
// ARCHITECTURE:
// - Owns the merged view of remote rockets and user-authored rockets
// - Remote rockets come from a RocketApi, custom ones from a
//   CustomRocketRepository
// - Exposes loading/error/current selection as readable state
//
// CONCURRENCY:
// - Operations take &self and may run concurrently through an Arc
// - The state lock is never held across an .await, so concurrent operations
//   interleave and loading/error/current_selection are last-writer-wins
// - Storage reads and writes happen under the state lock, so the in-memory
//   custom sequence and storage never diverge
//
// ERRORS:
// - A failing operation stores the error message in `error` and also
//   returns the error. The stored message may already belong to a later
//   operation by the time the caller reads it.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};
use serde::Serialize;

use crate::domain::{validate_rocket, DomainError, Rocket};
use crate::error::{AppError, AppResult};
use crate::integrations::RocketApi;
use crate::repositories::CustomRocketRepository;

/// Observable state of a RocketRepository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryState {
    /// Rockets from the last successful collection fetch, in response order
    pub remote: Vec<Rocket>,

    /// User-authored rockets, most recent first
    pub local: Vec<Rocket>,

    pub current_selection: Option<Rocket>,

    pub loading: bool,

    /// Message of the last recorded failure
    pub error: Option<String>,
}

impl RepositoryState {
    /// Remote rockets followed by local rockets
    fn combined(&self) -> impl Iterator<Item = &Rocket> {
        self.remote.iter().chain(self.local.iter())
    }
}

/// Restores `loading = false` when an operation ends, however it ends
struct LoadingGuard<'a> {
    state: &'a RwLock<RepositoryState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .loading = false;
    }
}

pub struct RocketRepository {
    api: Arc<dyn RocketApi>,
    custom_repo: Arc<dyn CustomRocketRepository>,
    state: RwLock<RepositoryState>,
}

impl RocketRepository {
    pub fn new(api: Arc<dyn RocketApi>, custom_repo: Arc<dyn CustomRocketRepository>) -> Self {
        Self {
            api,
            custom_repo,
            state: RwLock::new(RepositoryState::default()),
        }
    }

    // ========================================================================
    // OPERATIONS
    // ========================================================================

    /// Fetch the remote collection, then load custom rockets from storage
    ///
    /// On success the remote sequence is replaced wholesale. A fetch failure
    /// leaves both sequences untouched. Corrupt stored data fails the call
    /// after the remote sequence has been replaced; the local sequence is
    /// kept as it was.
    pub async fn fetch_all(&self) -> AppResult<()> {
        let _loading = self.begin(true);

        let rockets = match self.api.list_rockets().await {
            Ok(rockets) => rockets,
            Err(e) => return Err(self.record_failure(e)),
        };

        info!("Loaded {} remote rockets", rockets.len());

        // Held across the storage read so a concurrent add_local cannot be
        // overwritten by the older stored sequence
        let mut state = self.write();
        state.remote = rockets;

        let local = match self.custom_repo.load_all() {
            Ok(local) => local,
            Err(e) => {
                warn!("{}", e);
                state.error = Some(e.to_string());
                return Err(e);
            }
        };

        info!("Loaded {} custom rockets", local.len());
        state.local = local;

        Ok(())
    }

    /// Select a rocket by id, preferring custom rockets over the network
    ///
    /// A custom rocket with a matching id is selected without any request.
    /// Otherwise the rocket is fetched from `/rockets/{id}`.
    pub async fn fetch_one(&self, id: &str) -> AppResult<Rocket> {
        let _loading = self.begin(true);

        let local = self.read().local.iter().find(|r| r.id == id).cloned();
        if let Some(rocket) = local {
            debug!("Selected custom rocket {}", rocket);
            self.write().current_selection = Some(rocket.clone());
            return Ok(rocket);
        }

        let rocket = self
            .api
            .get_rocket(id)
            .await
            .map_err(|e| self.record_failure(e))?;

        debug!("Selected remote rocket {}", rocket);
        self.write().current_selection = Some(rocket.clone());
        Ok(rocket)
    }

    /// Add a user-authored rocket at the front of the custom sequence and
    /// persist the whole sequence
    ///
    /// The rocket must pass `validate_rocket` and its id must not collide
    /// with a rocket already held. Nothing changes in memory unless the
    /// write to storage succeeds.
    pub fn add_local(&self, rocket: Rocket) -> AppResult<()> {
        let _loading = self.begin(false);

        if let Err(e) = validate_rocket(&rocket) {
            return Err(self.record_failure(e.into()));
        }

        // Held until the write lands so concurrent adds cannot drop each other
        let mut state = self.write();

        if state.combined().any(|r| r.id == rocket.id) {
            let err = AppError::Domain(DomainError::InvariantViolation(format!(
                "Rocket id {} already exists",
                rocket.id
            )));
            warn!("{}", err);
            state.error = Some(err.to_string());
            return Err(err);
        }

        let mut local = Vec::with_capacity(state.local.len() + 1);
        local.push(rocket);
        local.extend(state.local.iter().cloned());

        if let Err(e) = self.custom_repo.save_all(&local) {
            warn!("{}", e);
            state.error = Some(e.to_string());
            return Err(e);
        }

        info!("Added custom rocket {}", local[0]);
        state.local = local;
        Ok(())
    }

    /// Replace the custom sequence with what storage holds, without any
    /// network request
    ///
    /// Front ends that add rockets before a collection fetch call this first
    /// so the add does not overwrite earlier entries.
    pub fn load_local(&self) -> AppResult<usize> {
        let _loading = self.begin(true);

        let mut state = self.write();

        let local = match self.custom_repo.load_all() {
            Ok(local) => local,
            Err(e) => {
                warn!("{}", e);
                state.error = Some(e.to_string());
                return Err(e);
            }
        };

        let count = local.len();
        state.local = local;

        info!("Loaded {} custom rockets", count);
        Ok(count)
    }

    // ========================================================================
    // READS
    // ========================================================================

    /// Remote rockets followed by custom rockets
    pub fn all_records(&self) -> Vec<Rocket> {
        self.read().combined().cloned().collect()
    }

    /// First rocket with `id` in `all_records` order
    ///
    /// Remote rockets win over custom rockets sharing an id here, while
    /// `fetch_one` prefers the custom one.
    pub fn find_by_id(&self, id: &str) -> Option<Rocket> {
        self.read().combined().find(|r| r.id == id).cloned()
    }

    pub fn remote_records(&self) -> Vec<Rocket> {
        self.read().remote.clone()
    }

    pub fn local_records(&self) -> Vec<Rocket> {
        self.read().local.clone()
    }

    pub fn current_selection(&self) -> Option<Rocket> {
        self.read().current_selection.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    pub fn snapshot(&self) -> RepositoryState {
        self.read().clone()
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    fn read(&self) -> RwLockReadGuard<'_, RepositoryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RepositoryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, clear_error: bool) -> LoadingGuard<'_> {
        let mut state = self.write();
        state.loading = true;
        if clear_error {
            state.error = None;
        }
        LoadingGuard { state: &self.state }
    }

    fn record_failure(&self, err: AppError) -> AppError {
        warn!("{}", err);
        self.write().error = Some(err.to_string());
        err
    }
}
