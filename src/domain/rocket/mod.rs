pub mod entity;
pub mod invariants;

pub use entity::Rocket;
pub use invariants::validate_rocket;
