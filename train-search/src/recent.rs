//! Recent searches.
//!
//! A short most-recent-first list of `"<origin> → <destination>"` strings,
//! persisted to a JSON file so it survives restarts.

use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Maximum number of remembered searches.
pub const MAX_RECENT: usize = 6;

/// Separator between origin and destination in an entry.
pub const ROUTE_SEPARATOR: &str = " → ";

/// Errors from the recent-search store.
#[derive(Debug, thiserror::Error)]
pub enum RecentError {
    #[error("failed to write recent searches: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize recent searches: {0}")]
    Json(#[from] serde_json::Error),
}

/// Format an entry from the two station labels.
pub fn format_entry(from: &str, to: &str) -> String {
    format!("{}{}{}", from.trim(), ROUTE_SEPARATOR, to.trim())
}

/// Split an entry back into its two labels.
///
/// Returns `None` unless the entry has exactly two parts.
pub fn split_entry(entry: &str) -> Option<(&str, &str)> {
    let mut parts = entry.split(ROUTE_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(from), Some(to), None) => Some((from, to)),
        _ => None,
    }
}

/// Bounded, duplicate-free list of searches, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentSearches {
    entries: Vec<String>,
}

impl RecentSearches {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries, dropping blanks and duplicates and
    /// keeping at most [`MAX_RECENT`].
    pub fn from_entries(stored: Vec<String>) -> Self {
        let mut entries: Vec<String> = Vec::with_capacity(MAX_RECENT);
        for entry in stored {
            if entry.trim().is_empty() || entries.contains(&entry) {
                continue;
            }
            entries.push(entry);
            if entries.len() == MAX_RECENT {
                break;
            }
        }
        Self { entries }
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remember a search.
    ///
    /// A blank entry or one already present leaves the list unchanged.
    /// Returns whether the list changed.
    pub fn save(&mut self, entry: &str) -> bool {
        if entry.trim().is_empty() || self.entries.iter().any(|e| e == entry) {
            return false;
        }
        self.entries.insert(0, entry.to_string());
        self.entries.truncate(MAX_RECENT);
        true
    }

    /// Remove the entry at `index`. Out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }
}

/// File-backed recent-search store.
pub struct RecentStore {
    path: PathBuf,
    searches: Mutex<RecentSearches>,
}

impl RecentStore {
    /// Open the store at `path`.
    ///
    /// A missing or unreadable file starts an empty list.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let searches = read_entries(&path)
            .map(RecentSearches::from_entries)
            .unwrap_or_default();
        debug!(path = ?path, entries = searches.len(), "opened recent-search store");

        Self {
            path,
            searches: Mutex::new(searches),
        }
    }

    /// Current entries, most recent first.
    pub async fn entries(&self) -> Vec<String> {
        self.searches.lock().await.entries().to_vec()
    }

    /// Remember a search and persist the list if it changed.
    pub async fn save(&self, entry: &str) -> Result<(), RecentError> {
        let mut searches = self.searches.lock().await;
        if searches.save(entry) {
            self.persist(&searches)?;
        }
        Ok(())
    }

    /// Remove one entry and persist the list if it changed.
    pub async fn remove(&self, index: usize) -> Result<Option<String>, RecentError> {
        let mut searches = self.searches.lock().await;
        let removed = searches.remove(index);
        if removed.is_some() {
            self.persist(&searches)?;
        }
        Ok(removed)
    }

    /// Write the list to disk, creating parent directories if needed.
    fn persist(&self, searches: &RecentSearches) -> Result<(), RecentError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(searches.entries())?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Read stored entries; `None` if the file is missing or corrupt.
fn read_entries(path: &Path) -> Option<Vec<String>> {
    let contents = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(entries) => Some(entries),
        Err(e) => {
            warn!(path = ?path, error = %e, "ignoring corrupt recent-search file");
            None
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The list never exceeds six entries and never holds duplicates
        #[test]
        fn bounded_and_unique(ops in prop::collection::vec(("[A-D]", "[A-D]"), 0..40)) {
            let mut recent = RecentSearches::new();
            for (from, to) in &ops {
                recent.save(&format_entry(from, to));
                prop_assert!(recent.len() <= MAX_RECENT);
            }
            let mut seen = std::collections::HashSet::new();
            for e in recent.entries() {
                prop_assert!(seen.insert(e.clone()));
            }
        }
    }
}
