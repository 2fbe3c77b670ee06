//! Error types for the verification CLI
//!
//! Every failure a step can hit maps onto one of these variants so the
//! runner can print a precise diagnostic instead of crashing on a missing
//! field or an unexpected status.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the verification CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Service/Connection Errors ===
    #[error("Service unreachable at {url}: {reason}. Start the backend first (npm run dev:backend)")]
    ServiceUnreachable { url: String, reason: String },

    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {endpoint} timed out after {secs} seconds")]
    Timeout { endpoint: String, secs: u64 },

    // === Response Errors ===
    #[error("{endpoint} returned status {status} (expected {expected}): {body}")]
    UnexpectedStatus {
        endpoint: String,
        expected: u16,
        status: u16,
        body: String,
    },

    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    // === Flow Errors ===
    #[error("Verification failed: {0}")]
    StepFailed(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a malformed response error
    pub fn malformed(endpoint: &str, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(endpoint: &str, expected: u16, status: u16, body: &str) -> Self {
        Self::UnexpectedStatus {
            endpoint: endpoint.to_string(),
            expected,
            status,
            body: body.to_string(),
        }
    }

    /// Classify a reqwest failure, separating timeouts from other transport errors
    pub fn from_reqwest(endpoint: &str, secs: u64, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                endpoint: endpoint.to_string(),
                secs,
            }
        } else {
            Self::Transport {
                endpoint: endpoint.to_string(),
                source,
            }
        }
    }

    /// HTTP status carried by this error, if the service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_mentions_code() {
        let err = Error::unexpected_status("POST /projects/create", 201, 409, "already exists");
        let msg = err.to_string();
        assert!(msg.contains("409"));
        assert!(msg.contains("already exists"));
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_malformed_has_no_status() {
        let err = Error::malformed("GET /projects/list", "missing field `data`");
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("missing field `data`"));
    }
}
