//! # Intake Telemetry
//!
//! Structured logging for the intake binaries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use intake_telemetry::{init_tracing, LogSink, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env("asset-server");
//! init_tracing(&config, LogSink::Stdout)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `INTAKE_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `INTAKE_JSON_LOGS` | `false` | Emit JSON lines instead of text |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{init_tracing, LogSink};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    #[error("Failed to open log file: {0}")]
    LogFile(#[from] std::io::Error),

    #[error("Failed to install subscriber: {0}")]
    Install(String),
}
