//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedTrainsClient;
use crate::recent::RecentStore;
use crate::stations::StationList;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached trains API client
    pub trains: Arc<CachedTrainsClient>,

    /// Station list for autocomplete
    pub stations: StationList,

    /// Recent searches, persisted to disk
    pub recent: Arc<RecentStore>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(trains: CachedTrainsClient, stations: StationList, recent: RecentStore) -> Self {
        Self {
            trains: Arc::new(trains),
            stations,
            recent: Arc::new(recent),
        }
    }
}
