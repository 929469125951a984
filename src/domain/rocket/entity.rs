use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rocket in the catalogue, either served by the remote API or authored
/// locally by the user.
///
/// Field names match the remote payload and the stored JSON. Unknown fields
/// in remote payloads are ignored; a missing or mistyped known field makes
/// the whole record fail to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rocket {
    /// Identifier, unique across remote and local records
    pub id: String,

    pub name: String,

    pub description: String,

    /// Image URLs
    pub flickr_images: Vec<String>,

    /// Cost of a single launch, in USD
    pub cost_per_launch: u64,

    pub country: String,

    /// Date of the first flight (`YYYY-MM-DD`)
    pub first_flight: NaiveDate,
}

impl Rocket {
    /// Create a user-authored rocket with a freshly generated identifier
    pub fn new_custom(
        name: String,
        description: String,
        flickr_images: Vec<String>,
        cost_per_launch: u64,
        country: String,
        first_flight: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            flickr_images,
            cost_per_launch,
            country,
            first_flight,
        }
    }
}

impl std::fmt::Display for Rocket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
