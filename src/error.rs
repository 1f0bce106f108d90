//! Errors for the remote configuration fetch.

use thiserror::Error;

/// Failure modes of a remote configuration fetch.
///
/// All of these are recovered by the loader, which logs a warning and falls
/// back to the local `.env` file; none of them abort startup.
#[derive(Debug, Error)]
pub enum RemoteConfigError {
    /// `CONFIG_ACCESS_TOKEN` was absent or empty. Checked before any I/O.
    #[error("CONFIG_ACCESS_TOKEN not set")]
    MissingToken,

    #[error("invalid config service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport failure, including the 10-second timeout.
    #[error("failed to fetch config: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with something other than 200. Carries the raw
    /// body for diagnostics.
    #[error("config service returned {status}: {body}")]
    BadStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The body was not a JSON map of string keys to string values.
    #[error("failed to parse config response: {0}")]
    Parse(#[from] serde_json::Error),
}
