// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are front-end friendly: plain strings, no domain types
// - Parsing into domain entities happens in command handlers

use serde::{Deserialize, Serialize};

use crate::domain::Rocket;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocketDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub flickr_images: Vec<String>,
    pub cost_per_launch: u64,
    pub country: String,
    pub first_flight: String,
}

impl From<Rocket> for RocketDto {
    fn from(rocket: Rocket) -> Self {
        Self {
            id: rocket.id,
            name: rocket.name,
            description: rocket.description,
            flickr_images: rocket.flickr_images,
            cost_per_launch: rocket.cost_per_launch,
            country: rocket.country,
            first_flight: rocket.first_flight.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Input for a user-authored rocket; the id is generated on creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRocketDto {
    pub name: String,
    pub description: String,
    pub flickr_images: Vec<String>,
    pub cost_per_launch: u64,
    pub country: String,
    /// `YYYY-MM-DD`
    pub first_flight: String,
}

/// Snapshot of the repository's observable status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryStatusDto {
    pub loading: bool,
    pub error: Option<String>,
    pub remote_count: usize,
    pub local_count: usize,
    pub current_selection: Option<RocketDto>,
}
