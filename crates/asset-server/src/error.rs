//! Asset server errors.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Asset directory not found: {0}")]
    MissingAssets(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
