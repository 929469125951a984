// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod rocket_repository;

pub use rocket_repository::{RepositoryState, RocketRepository};
