// src/lib.rs
// RocketHub - Rocket catalogue client with local-first custom entries
//
// Architecture:
// - Remote rockets come from the SpaceX REST API (integrations)
// - User-authored rockets live in durable key-value storage (storage, repositories)
// - RocketRepository merges both and exposes loading/error state (services)
// - Application layer: boundary for front ends (application)

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod integrations;
pub mod repositories;
pub mod services;
pub mod storage;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{validate_rocket, DomainError, DomainResult, Rocket};

// ============================================================================
// PUBLIC API - Errors & Configuration
// ============================================================================

pub use config::RocketHubConfig;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Storage & Repositories
// ============================================================================

pub use repositories::{CustomRocketRepository, StoredCustomRocketRepository, STORAGE_KEY};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{RocketApi, SpaceXClient};

// ============================================================================
// PUBLIC API - State Container
// ============================================================================

pub use services::{RepositoryState, RocketRepository};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

pub use application::commands;
pub use application::dto;
