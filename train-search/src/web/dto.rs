//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{InvalidStationCode, StationCode};
use crate::pipeline::{FilterMode, Route, SelectionState, SortMode, ViewRow};
use crate::recent::split_entry;
use crate::stations::Station;

/// Date format used in query strings and JSON.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query for the results page.
#[derive(Debug, Default, Deserialize)]
pub struct RouteQuery {
    /// Origin station code or autocomplete label
    pub from: Option<String>,

    /// Destination station code or autocomplete label
    pub to: Option<String>,

    /// Selected date, `YYYY-MM-DD` (defaults to today)
    pub date: Option<String>,

    /// Sort mode, e.g. "earliest" or "late"
    pub sort: Option<String>,

    /// Filter mode, e.g. "superfast" or "available"
    pub filter: Option<String>,
}

impl RouteQuery {
    /// The queried station pair.
    pub fn route(&self) -> Result<Route, InvalidStationCode> {
        let from = StationCode::from_input(self.from.as_deref().unwrap_or_default())?;
        let to = StationCode::from_input(self.to.as_deref().unwrap_or_default())?;
        Ok(Route::new(from, to))
    }

    /// Selection from the query, with unparseable values defaulted.
    pub fn selection(&self, today: NaiveDate) -> SelectionState {
        let date = parse_date(self.date.as_deref(), today);
        let sort = self
            .sort
            .as_deref()
            .map(SortMode::parse_lenient)
            .unwrap_or_default();
        let filter = self
            .filter
            .as_deref()
            .map(FilterMode::parse_lenient)
            .unwrap_or_default();

        SelectionState::for_date(date)
            .with_sort(sort)
            .with_filter(filter)
    }
}

/// Parse a `YYYY-MM-DD` date, falling back to `today`.
pub fn parse_date(date: Option<&str>, today: NaiveDate) -> NaiveDate {
    date.and_then(|d| NaiveDate::parse_from_str(d.trim(), DATE_FORMAT).ok())
        .unwrap_or(today)
}

/// Dashboard search form submission.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Origin autocomplete label, e.g. "New Delhi (NDLS)"
    #[serde(default)]
    pub from: String,

    /// Destination autocomplete label
    #[serde(default)]
    pub to: String,
}

/// Results for one station pair.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub from: String,
    pub to: String,
    pub date: String,
    pub sort: String,
    pub filter: String,

    /// Number of trains the API returned before filtering
    pub fetched: usize,

    pub trains: Vec<ViewRow>,
}

impl RouteResponse {
    pub fn new(route: &Route, selection: &SelectionState, fetched: usize, trains: Vec<ViewRow>) -> Self {
        Self {
            from: route.from.to_string(),
            to: route.to.to_string(),
            date: selection.selected_date.format(DATE_FORMAT).to_string(),
            sort: selection.sort_mode.to_string(),
            filter: selection.filter_mode.to_string(),
            fetched,
            trains,
        }
    }
}

/// Request to search stations.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search query (name or code)
    #[serde(default)]
    pub q: String,

    /// Maximum results (default 8, max 50)
    pub limit: Option<usize>,
}

/// A station in autocomplete results.
#[derive(Debug, Serialize)]
pub struct StationSearchResult {
    pub code: String,
    pub name: String,

    /// Text to put in the input, e.g. "New Delhi (NDLS)"
    pub label: String,
}

impl StationSearchResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            code: station.stn_code.clone(),
            name: station.stn_name.clone(),
            label: station.label(),
        }
    }
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationSearchResult>,
}

/// A recent search.
#[derive(Debug, Serialize)]
pub struct RecentSearchResult {
    /// Position in the list, used for deletion
    pub index: usize,

    /// The stored entry, e.g. "New Delhi (NDLS) → Howrah Jn (HWH)"
    pub entry: String,

    /// Origin label, if the entry splits cleanly
    pub from: Option<String>,

    /// Destination label, if the entry splits cleanly
    pub to: Option<String>,
}

impl RecentSearchResult {
    pub fn new(index: usize, entry: &str) -> Self {
        let parts = split_entry(entry);
        Self {
            index,
            entry: entry.to_string(),
            from: parts.map(|(from, _)| from.to_string()),
            to: parts.map(|(_, to)| to.to_string()),
        }
    }
}

/// Response listing recent searches.
#[derive(Debug, Serialize)]
pub struct RecentResponse {
    pub searches: Vec<RecentSearchResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
