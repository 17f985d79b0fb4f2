//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for presentation shells
//! - Driven Ports (outbound) - Remote form API and credential hashing

pub mod inbound;
pub mod outbound;

pub use inbound::IntakeApi;
pub use outbound::{CredentialHasher, FormEndpoint, SubmitResponse};
