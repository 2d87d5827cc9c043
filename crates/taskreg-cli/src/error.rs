//! Error types for the TaskReg HTTP client.

use thiserror::Error;

/// Errors that can occur when talking to the TaskReg server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or unexpected HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The requested task does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The server refused the request (e.g. an unsafe command).
    #[error("rejected: {0}")]
    Rejected(String),
}
