//! Telemetry configuration from environment variables.

use std::env;

/// Logging configuration shared by the intake binaries.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name recorded at startup
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error, or an EnvFilter directive)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "intake".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// - `INTAKE_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `INTAKE_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env(service_name: &str) -> Self {
        Self::from_lookup(service_name, |key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(service_name: &str, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            service_name: service_name.to_string(),

            log_level: lookup("INTAKE_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or_else(|| "info".to_string()),

            json_logs: lookup("INTAKE_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}
