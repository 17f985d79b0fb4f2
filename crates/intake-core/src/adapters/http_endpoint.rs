//! HTTP adapter for the remote form API.
//!
//! One fixed URL serves both directions: `GET` returns the options catalog and
//! `POST` accepts a submission.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::debug;

use crate::domain::{ApiConfig, OptionsCatalog, SubmissionPayload};
use crate::error::ApiError;
use crate::ports::{FormEndpoint, SubmitResponse};

/// reqwest-backed [`FormEndpoint`].
#[derive(Debug, Clone)]
pub struct HttpFormEndpoint {
    client: Client,
    endpoint: Url,
}

impl HttpFormEndpoint {
    /// Create a new client for the configured endpoint.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| ApiError::InvalidEndpoint(format!("{}: {}", config.endpoint, e)))?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::Http)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl FormEndpoint for HttpFormEndpoint {
    async fn fetch_options(&self) -> Result<OptionsCatalog, ApiError> {
        debug!(endpoint = %self.endpoint, "Fetching options catalog");

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<OptionsCatalog>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmitResponse, ApiError> {
        let body = serde_json::to_vec(payload).map_err(|e| ApiError::Encode(e.to_string()))?;

        debug!(endpoint = %self.endpoint, bytes = body.len(), "Posting submission");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or("<non-ascii>").to_string(),
                )
            })
            .collect();
        // The status already decides the outcome; a broken body only costs diagnostics.
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<unreadable body: {}>", e));

        Ok(SubmitResponse {
            status,
            headers,
            body,
        })
    }
}
