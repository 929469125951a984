// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between front ends (the CLI) and the rocket repository
// - Translates between DTOs and domain entities
// - Never contains business logic

pub mod commands;
pub mod dto;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use state::AppState;
