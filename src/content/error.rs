//! Errors raised while loading the digest.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can make a digest load fail.
#[derive(Debug, Error)]
pub enum ContentError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network-level failure talking to the provider
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Provider answered with something other than 200 OK
    #[error("Content provider returned HTTP {status}")]
    Status { status: u16 },

    /// Body was not a `{"stories": [...]}` document
    #[error("Malformed news payload: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload decoded but held no slides
    #[error("Content provider returned no stories")]
    Empty,
}
