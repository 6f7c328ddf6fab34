//! Station list and autocomplete search.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::StationError;

/// Default number of autocomplete suggestions.
pub const DEFAULT_SUGGESTIONS: usize = 8;

/// Hard cap on suggestions per request.
pub const MAX_SUGGESTIONS: usize = 50;

/// Station list document: `{ "stations": [...] }`.
#[derive(Debug, Deserialize)]
pub struct StationsDocument {
    pub stations: Vec<Station>,
}

/// A station as listed in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub stn_name: String,
    pub stn_code: String,
}

impl Station {
    /// Autocomplete label, e.g. "New Delhi (NDLS)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.stn_name, self.stn_code)
    }
}

/// Immutable, shareable list of stations.
#[derive(Debug, Clone, Default)]
pub struct StationList {
    stations: Arc<Vec<Station>>,
}

impl StationList {
    /// Create from already-loaded stations.
    pub fn new(stations: Vec<Station>) -> Self {
        Self {
            stations: Arc::new(stations),
        }
    }

    /// Parse a station list document.
    pub fn from_json(json: &str) -> Result<Self, StationError> {
        let doc: StationsDocument = serde_json::from_str(json).map_err(|e| StationError::Json {
            message: e.to_string(),
        })?;
        Ok(Self::new(doc.stations))
    }

    /// Load a station list document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from disk, falling back to an empty list on any error.
    ///
    /// Autocomplete is a convenience; the server still works without it.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(list) => {
                info!(stations = list.len(), "loaded station list");
                list
            }
            Err(e) => {
                warn!(error = %e, "station list unavailable, autocomplete disabled");
                Self::default()
            }
        }
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Stations whose name or code contains `query` (case-insensitive),
    /// in list order, at most `limit`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Station> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.stations
            .iter()
            .filter(|s| {
                s.stn_name.to_lowercase().contains(&query)
                    || s.stn_code.to_lowercase().contains(&query)
            })
            .take(limit.min(MAX_SUGGESTIONS))
            .collect()
    }

    /// Find a station by exact code (case-insensitive).
    pub fn by_code(&self, code: &str) -> Option<&Station> {
        self.stations
            .iter()
            .find(|s| s.stn_code.eq_ignore_ascii_case(code))
    }
}
