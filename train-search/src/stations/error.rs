//! Station list error types.

use std::path::PathBuf;

/// Errors that can occur when loading the station list.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The file could not be read
    #[error("failed to read station list {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid station list document
    #[error("failed to parse station list: {message}")]
    Json { message: String },
}
