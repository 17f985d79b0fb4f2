//! Error types for the intake flow

use thiserror::Error;

use crate::domain::ConfigError;

/// Errors that can occur when talking to the remote form API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request could not be built: {0}")]
    Request(String),

    #[error("Unexpected status: {status}")]
    Status { status: u16 },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl ApiError {
    /// Classify a reqwest error by the stage it failed in.
    pub fn from_transport(error: reqwest::Error) -> Self {
        if error.is_builder() {
            ApiError::Request(error.to_string())
        } else if error.is_connect() {
            ApiError::Connection(error.to_string())
        } else if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else {
            ApiError::Http(error)
        }
    }

    /// True when the failure happened before anything was sent.
    pub fn is_request_setup(&self) -> bool {
        matches!(
            self,
            ApiError::Request(_) | ApiError::Encode(_) | ApiError::InvalidEndpoint(_)
        )
    }
}

/// Errors from the credential preparer
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Hasher returned the plaintext unchanged")]
    PlaintextEcho,

    #[error("Hashing task aborted: {0}")]
    Aborted(String),
}

/// Errors raised while wiring a service from configuration
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("client setup error: {0}")]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_setup_classification() {
        assert!(ApiError::Request("bad header".into()).is_request_setup());
        assert!(ApiError::InvalidEndpoint("nope".into()).is_request_setup());
        assert!(!ApiError::Status { status: 500 }.is_request_setup());
        assert!(!ApiError::Connection("refused".into()).is_request_setup());
    }

    #[test]
    fn test_display() {
        let err = ApiError::Status { status: 503 };
        assert_eq!(err.to_string(), "Unexpected status: 503");
    }
}
