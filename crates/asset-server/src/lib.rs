//! # Asset Server
//!
//! Serves a pre-built asset directory over HTTP. There are no routes beyond
//! the files themselves: `/` resolves to `index.html` and anything missing is
//! a 404.
//!
//! The only setting is the listening port, read from `PORT` (default `3000`).
//! Files come from `public/` relative to the working directory.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod server;

pub use config::{ServerConfig, DEFAULT_ASSET_DIR, DEFAULT_PORT};
pub use error::ServerError;
pub use server::{build_router, serve};
