// src/integrations/mod.rs
//
// External Integrations Module

pub mod spacex;

pub use spacex::client::{RocketApi, SpaceXClient};

#[cfg(test)]
pub use spacex::client::MockRocketApi;
