//! Trains API HTTP client.
//!
//! Queries the trains-between-stations endpoint and converts the response
//! to domain records.

use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{StationCode, TrainRecord};

use super::convert::convert_response;
use super::error::ApiError;
use super::types::TrainsBetweenResponse;

/// Default base URL: the API running locally.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the trains API client.
#[derive(Debug, Clone)]
pub struct TrainsApiConfig {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TrainsApiConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TrainsApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the trains-between-stations API.
#[derive(Debug, Clone)]
pub struct TrainsApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl TrainsApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TrainsApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The endpoint URL for trains between stations.
    pub fn endpoint(&self) -> String {
        format!("{}/trains/betweenStations", self.base_url)
    }

    /// Fetch all trains between two stations.
    ///
    /// An empty list is a valid answer; `success: false` is an error.
    pub async fn trains_between(
        &self,
        from: &StationCode,
        to: &StationCode,
    ) -> Result<Vec<TrainRecord>, ApiError> {
        let url = self.endpoint();
        debug!(%from, %to, %url, "fetching trains between stations");

        let response = self
            .http
            .get(&url)
            .query(&[("from", from.as_str()), ("to", to.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "trains API returned an error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: TrainsBetweenResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        convert_response(&parsed)
    }
}
