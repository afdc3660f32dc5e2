//! Provides exchange rate acquisition for the application.

use crate::rates::RateTable;
use async_trait::async_trait;
use thiserror::Error;

/// Why a rate fetch failed. One category per failure mode so callers can log
/// something more useful than a blanket "could not fetch".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),
    #[error("Failed to parse rate response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Rate service reported failure: {0}")]
    Schema(String),
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the full rate table against the configured base currency.
    ///
    /// One attempt, no retry, no partial result.
    async fn fetch_rates(&self) -> Result<RateTable, FetchError>;
}
