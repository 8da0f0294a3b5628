//! Registry error types.

use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors raised by the registry HTTP layer.
///
/// The sync driver treats every variant as fatal to the run; only the
/// uploader's response interpretation (item-level `success: false`
/// descriptors) is recoverable, and that never surfaces as an error.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid registry URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("registry returned HTTP {status} for {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },
}
