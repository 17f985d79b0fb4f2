//! Adapters Layer (Driven Adapters)
//!
//! Implementations of driven ports that reach outside the process.
//!
//! ## Adapters
//!
//! - `HttpFormEndpoint` - reqwest client for the remote form API
//! - `BcryptHasher` - bcrypt credential hashing

pub mod bcrypt_hasher;
pub mod http_endpoint;

pub use bcrypt_hasher::BcryptHasher;
pub use http_endpoint::HttpFormEndpoint;
