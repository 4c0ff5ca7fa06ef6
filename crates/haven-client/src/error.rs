//! Client error taxonomy.
//!
//! Callers in the browser collapse all of these into an empty view; the
//! variants exist for logging and for the CLI.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Haven API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response from {path}: {message}")]
    Decode { path: String, message: String },

    #[error("Invalid base URL '{0}'")]
    InvalidUrl(String),
}

impl ClientError {
    /// 4xx/5xx answered by the backend, as opposed to transport failure.
    pub fn is_status(&self) -> bool {
        matches!(self, ClientError::Status { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
