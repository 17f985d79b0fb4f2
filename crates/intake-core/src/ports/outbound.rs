//! Outbound Ports (Driven Ports)
//!
//! Dependencies the intake flow needs from the outside world.

use async_trait::async_trait;

use crate::domain::{OptionsCatalog, SubmissionPayload};
use crate::error::{ApiError, CredentialError};

/// Raw answer to a form write. Any status is a valid response here.
#[derive(Debug, Clone, Default)]
pub struct SubmitResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Remote form API (Driven Port)
#[async_trait]
pub trait FormEndpoint: Send + Sync {
    /// `GET` the options catalog. Non-2xx is an error.
    async fn fetch_options(&self) -> Result<OptionsCatalog, ApiError>;

    /// `POST` a payload as JSON. Errors only when no response was obtained.
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmitResponse, ApiError>;
}

/// One-way password hashing (Driven Port)
///
/// Implementations must salt freshly on every call and return a
/// self-describing hash string.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, CredentialError>;

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, CredentialError>;
}
