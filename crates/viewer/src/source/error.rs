//! Error: retrieval failures, each rendered as one human-readable line.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("No log content found in API response")]
    MissingContent,

    #[error("API request was not successful")]
    Unsuccessful,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Failed to fetch logs: HTTP status {0}")]
    Status(u16),

    #[error("Failed to fetch logs: {0}")]
    Transport(String),

    #[error("Failed to fetch logs: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to fetch logs: {0}")]
    Http(#[from] reqwest::Error),
}
