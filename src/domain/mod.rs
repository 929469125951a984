// src/domain/mod.rs
//
// Domain Root
//
// All other modules import domain types from `crate::domain::*`

pub mod rocket;

pub use rocket::{validate_rocket, Rocket};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of the rules a record must satisfy
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
