//! Server configuration.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use tracing::warn;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSET_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub asset_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
        }
    }
}

impl ServerConfig {
    /// Read `PORT`. Host and asset directory are fixed.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// An unparseable port falls back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, default = DEFAULT_PORT, "Ignoring unparseable PORT");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            port,
            ..Self::default()
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn validate(&self) -> Result<(), ServerError> {
        if self.asset_dir.as_os_str().is_empty() {
            return Err(ServerError::Config("asset_dir must not be empty".into()));
        }
        if !self.asset_dir.is_dir() {
            return Err(ServerError::MissingAssets(self.asset_dir.clone()));
        }
        Ok(())
    }
}
