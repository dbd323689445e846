//! State file error types.

use thiserror::Error;

/// Errors that can occur while reading or writing the state file.
#[derive(Debug, Error)]
pub enum StateError {
    /// The state file does not exist.
    #[error("State file '{path}' not found; seed it with the current commits")]
    Missing { path: String },

    /// Reading or writing the file failed.
    #[error("Failed to access state file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid commit record.
    #[error("Failed to parse state file '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
