// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO network access

pub mod custom_rocket_repository;

pub use custom_rocket_repository::{
    CustomRocketRepository, StoredCustomRocketRepository, STORAGE_KEY,
};

#[cfg(test)]
pub use custom_rocket_repository::MockCustomRocketRepository;
