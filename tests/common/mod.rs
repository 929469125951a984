#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use rockethub::{
    FileKeyValueStore, KeyValueStore, RocketRepository, SpaceXClient,
    StoredCustomRocketRepository,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::MockServer;

/// A rocket as the remote API serves it, extra fields included
pub fn remote_rocket_json(id: &str, name: &str) -> Value {
    json!({
        "height": { "meters": 70, "feet": 229.6 },
        "diameter": { "meters": 3.7, "feet": 12 },
        "active": true,
        "stages": 2,
        "boosters": 0,
        "flickr_images": [format!("https://farm1.staticflickr.com/{}.jpg", id)],
        "name": name,
        "type": "rocket",
        "cost_per_launch": 50000000,
        "success_rate_pct": 98,
        "first_flight": "2010-06-04",
        "country": "United States",
        "company": "SpaceX",
        "wikipedia": "https://en.wikipedia.org/wiki/Falcon_9",
        "description": format!("{} description", name),
        "id": id
    })
}

pub fn client_for(server: &MockServer) -> SpaceXClient {
    SpaceXClient::new(&format!("{}/v4", server.uri()), Duration::from_secs(5)).unwrap()
}

pub struct Harness {
    pub dir: TempDir,
    pub store: Arc<FileKeyValueStore>,
    pub repository: RocketRepository,
}

/// A repository talking to `server` and storing into a fresh temp dir
pub fn harness(server: &MockServer) -> Harness {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileKeyValueStore::open(dir.path()).unwrap());
    let repository = repository_over(server, store.clone());
    Harness {
        dir,
        store,
        repository,
    }
}

pub fn repository_over(server: &MockServer, store: Arc<dyn KeyValueStore>) -> RocketRepository {
    RocketRepository::new(
        Arc::new(client_for(server)),
        Arc::new(StoredCustomRocketRepository::new(store)),
    )
}
