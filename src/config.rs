// src/config.rs
//
// Runtime configuration
//
// Defaults are overridden by environment variables, which the binary
// overrides again with command-line flags.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const DEFAULT_API_BASE_URL: &str = "https://api.spacexdata.com/v4";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_API_URL: &str = "ROCKETHUB_API_URL";
pub const ENV_DATA_DIR: &str = "ROCKETHUB_DATA_DIR";
pub const ENV_TIMEOUT_SECS: &str = "ROCKETHUB_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RocketHubConfig {
    /// Base URL of the rocket API, without a trailing slash
    pub api_base_url: String,

    /// Directory holding durable local storage
    pub data_dir: PathBuf,

    pub request_timeout: Duration,
}

impl RocketHubConfig {
    /// Build the default configuration
    ///
    /// Data lives in the platform data directory:
    /// {APP_DATA}/rockethub
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_dir: default_data_dir()?,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Defaults overridden by `ROCKETHUB_*` environment variables
    pub fn from_env() -> AppResult<Self> {
        Self::new()?.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (the environment in production)
    pub fn with_overrides<F>(mut self, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self = self.with_api_base_url(url);
        }

        if let Some(dir) = lookup(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(dir);
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let invalid = || {
                AppError::Other(format!(
                    "{} must be a positive whole number of seconds, got `{}`",
                    ENV_TIMEOUT_SECS, secs
                ))
            };
            let secs: u64 = secs.trim().parse().map_err(|_| invalid())?;
            if secs == 0 {
                return Err(invalid());
            }
            self.request_timeout = Duration::from_secs(secs);
        }

        Ok(self)
    }

    pub fn with_api_base_url(mut self, url: String) -> Self {
        self.api_base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = dir;
        self
    }
}

/// Resolve the platform data directory for local storage
pub fn default_data_dir() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    Ok(app_data_dir.join("rockethub"))
}
