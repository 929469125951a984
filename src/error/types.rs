// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Every failure the crate can report.
///
/// Repository operations record `to_string()` of the error in the shared
/// error field before returning it, so the display text is what UI callers
/// see.
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure or non-success HTTP status.
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// Malformed response body or stored data.
    #[error("Parse failed: {0}")]
    ParseFailed(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, AppError::FetchFailed(_))
    }

    pub fn is_parse_failure(&self) -> bool {
        matches!(self, AppError::ParseFailed(_))
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseFailed(err.to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::ParseFailed(format!("Date parse error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
