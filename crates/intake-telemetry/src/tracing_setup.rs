//! Subscriber installation.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::{TelemetryConfig, TelemetryError};

/// Where log lines go.
#[derive(Debug, Clone)]
pub enum LogSink {
    /// Standard output, for servers
    Stdout,
    /// Append to a file; a full-screen terminal UI cannot share stdout
    File(PathBuf),
    /// Drop everything
    Discard,
}

impl LogSink {
    fn ansi(&self) -> bool {
        matches!(self, LogSink::Stdout)
    }

    fn writer(&self) -> Result<BoxMakeWriter, TelemetryError> {
        Ok(match self {
            LogSink::Stdout => BoxMakeWriter::new(std::io::stdout),
            LogSink::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                BoxMakeWriter::new(Mutex::new(file))
            }
            LogSink::Discard => BoxMakeWriter::new(std::io::sink),
        })
    }
}

/// Build the level filter from config.
pub(crate) fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Filter {
        filter: config.log_level.clone(),
        reason: e.to_string(),
    })
}

/// Install the global tracing subscriber.
pub fn init_tracing(config: &TelemetryConfig, sink: LogSink) -> Result<(), TelemetryError> {
    let env_filter = env_filter(config)?;
    let writer = sink.writer()?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(writer)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_ansi(sink.ansi())
            .with_writer(writer)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| TelemetryError::Install(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        level = %config.log_level,
        json = config.json_logs,
        "Logging initialized"
    );

    Ok(())
}
