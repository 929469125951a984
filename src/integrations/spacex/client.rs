// src/integrations/spacex/client.rs
//
// SpaceX REST API Integration
//
// ARCHITECTURE:
// - Plain JSON over HTTP GET, no authentication
// - Maps transport and status failures to FetchFailed
// - Maps undecodable bodies to ParseFailed
// - Holds no state besides the HTTP client

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{header, Client, Url};
use serde::de::DeserializeOwned;

use crate::config::RocketHubConfig;
use crate::domain::Rocket;
use crate::error::{AppError, AppResult};

/// Read access to the remote rocket catalogue
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RocketApi: Send + Sync {
    /// `GET /rockets`
    async fn list_rockets(&self) -> AppResult<Vec<Rocket>>;

    /// `GET /rockets/{id}`
    async fn get_rocket(&self, id: &str) -> AppResult<Rocket>;
}

/// SpaceX v4 API client
pub struct SpaceXClient {
    base_url: Url,
    http_client: Client,
}

impl SpaceXClient {
    /// Create a client for `base_url` (e.g. `https://api.spacexdata.com/v4`)
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::Other(format!("Invalid API base URL `{}`: {}", base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(AppError::Other(format!(
                "API base URL `{}` cannot hold a path",
                base_url
            )));
        }

        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    pub fn from_config(config: &RocketHubConfig) -> AppResult<Self> {
        Self::new(&config.api_base_url, config.request_timeout)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Other(format!("API base URL `{}` cannot hold a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ========================================================================
    // INTERNAL: Request Execution
    // ========================================================================

    async fn get_json<T>(&self, url: Url) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(url.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::FetchFailed(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned status {}", url, status);
            return Err(AppError::FetchFailed(format!(
                "GET {} returned status {}",
                url, status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::FetchFailed(format!("Failed to read response from {}: {}", url, e)))?;

        serde_json::from_slice(&body)
            .map_err(|e| AppError::ParseFailed(format!("Invalid response from {}: {}", url, e)))
    }
}

#[async_trait]
impl RocketApi for SpaceXClient {
    async fn list_rockets(&self) -> AppResult<Vec<Rocket>> {
        let url = self.endpoint(&["rockets"])?;
        let rockets: Vec<Rocket> = self.get_json(url).await?;
        debug!("Fetched {} rockets", rockets.len());
        Ok(rockets)
    }

    async fn get_rocket(&self, id: &str) -> AppResult<Rocket> {
        let url = self.endpoint(&["rockets", id])?;
        self.get_json(url).await
    }
}
