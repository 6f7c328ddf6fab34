//! Trains-between-stations API client.
//!
//! The remote API answers `GET /trains/betweenStations?from=..&to=..` with
//! `{ success, data: [{ train_base: {...} }] }`. This module fetches that
//! document and converts it to [`TrainRecord`]s. A file-backed mock serves
//! the same shape for development.
//!
//! Key characteristics of the API:
//! - Times are "HH.MM" strings (dot separator)
//! - Running days are a Monday-first '0'/'1' string
//! - Fields are omitted rather than sent as null

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TrainsApiClient, TrainsApiConfig};
pub use convert::{convert_item, convert_response, convert_train_base};
pub use error::ApiError;
pub use mock::MockTrainsClient;
pub use types::{ResponseData, TrainBase, TrainItem, TrainsBetweenResponse};

use crate::domain::{StationCode, TrainRecord};

/// Where train lists come from.
#[derive(Clone)]
pub enum TrainsBackend {
    /// The remote HTTP API.
    Live(TrainsApiClient),
    /// Canned responses loaded from disk.
    Mock(MockTrainsClient),
}

impl TrainsBackend {
    /// Fetch all trains between two stations.
    pub async fn trains_between(
        &self,
        from: &StationCode,
        to: &StationCode,
    ) -> Result<Vec<TrainRecord>, ApiError> {
        match self {
            TrainsBackend::Live(client) => client.trains_between(from, to).await,
            TrainsBackend::Mock(client) => client.trains_between(from, to).await,
        }
    }

    /// Short description for logs.
    pub fn describe(&self) -> &'static str {
        match self {
            TrainsBackend::Live(_) => "live API",
            TrainsBackend::Mock(_) => "mock data",
        }
    }
}
