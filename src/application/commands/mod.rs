// src/application/commands/mod.rs

pub mod rocket_commands;

pub use rocket_commands::*;
