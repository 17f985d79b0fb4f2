//! Intake configuration with validation.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Remote form API used for both the options read and the form write.
pub const DEFAULT_ENDPOINT: &str = "https://frontend-take-home.fetchrewards.com/form";

/// bcrypt work factor for interactive use.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Bounds accepted by bcrypt.
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Main intake configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Remote API configuration
    pub api: ApiConfig,
    /// Credential preparation configuration
    pub credential: CredentialConfig,
}

impl IntakeConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = reqwest::Url::parse(&self.api.endpoint)
            .map_err(|e| ConfigError::InvalidEndpoint(format!("{}: {}", self.api.endpoint, e)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint(format!(
                "unsupported scheme '{}'",
                endpoint.scheme()
            )));
        }

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.credential.cost) {
            return Err(ConfigError::InvalidCost(self.credential.cost));
        }

        if self.api.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::InvalidTimeout(
                "timeout cannot be 0".into(),
            ));
        }

        Ok(())
    }
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Form endpoint URL
    pub endpoint: String,
    /// Per-request timeout. `None` keeps the transport default.
    #[serde(with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

/// Credential preparation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialConfig {
    /// bcrypt cost factor (default: 10)
    pub cost: u32,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            cost: DEFAULT_BCRYPT_COST,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("bcrypt cost {0} is outside 4..=31")]
    InvalidCost(u32),

    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
}
