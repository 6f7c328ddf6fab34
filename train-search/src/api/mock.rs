//! Mock trains API for development without the remote service.
//!
//! Loads canned responses from JSON files and serves them as if they were
//! live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::domain::{StationCode, TrainRecord};

use super::convert::convert_response;
use super::error::ApiError;
use super::types::TrainsBetweenResponse;

type PairKey = (StationCode, StationCode);

/// Mock client that serves responses from JSON files.
#[derive(Clone)]
pub struct MockTrainsClient {
    responses: Arc<HashMap<PairKey, TrainsBetweenResponse>>,
}

/// Parse a file stem such as `NDLS_HWH` into a station pair.
fn parse_pair(stem: &str) -> Option<PairKey> {
    let (from, to) = stem.split_once('_')?;
    Some((StationCode::parse(from).ok()?, StationCode::parse(to).ok()?))
}

fn load_dir(data_dir: &Path) -> Result<HashMap<PairKey, TrainsBetweenResponse>, ApiError> {
    let mut responses = HashMap::new();

    let entries = std::fs::read_dir(data_dir).map_err(|e| ApiError::Mock {
        message: format!("failed to read mock data directory {:?}: {}", data_dir, e),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ApiError::Mock {
            message: format!("failed to read directory entry: {}", e),
        })?;

        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ApiError::Mock {
                message: format!("invalid filename: {:?}", path),
            })?;

        let key = parse_pair(stem).ok_or_else(|| ApiError::Mock {
            message: format!("expected FROM_TO.json, got {:?}", path),
        })?;

        let json = std::fs::read_to_string(&path).map_err(|e| ApiError::Mock {
            message: format!("failed to read {:?}: {}", path, e),
        })?;

        let response: TrainsBetweenResponse =
            serde_json::from_str(&json).map_err(|e| ApiError::Mock {
                message: format!("failed to parse {:?}: {}", path, e),
            })?;

        responses.insert(key, response);
    }

    if responses.is_empty() {
        return Err(ApiError::Mock {
            message: format!("no mock response files found in {:?}", data_dir),
        });
    }

    Ok(responses)
}

impl MockTrainsClient {
    /// Load every `{FROM}_{TO}.json` file in `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, ApiError> {
        let data_dir = data_dir.as_ref();
        let responses = load_dir(data_dir)?;
        info!(pairs = responses.len(), dir = ?data_dir, "loaded mock trains data");

        Ok(Self {
            responses: Arc::new(responses),
        })
    }

    /// Mimics [`TrainsApiClient::trains_between`](super::TrainsApiClient::trains_between).
    pub async fn trains_between(
        &self,
        from: &StationCode,
        to: &StationCode,
    ) -> Result<Vec<TrainRecord>, ApiError> {
        let response = self.responses.get(&(*from, *to)).ok_or_else(|| ApiError::Status {
            status: 404,
            message: format!("no mock data for {} → {}", from, to),
        })?;

        convert_response(response)
    }
}
