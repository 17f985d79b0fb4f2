//! # Intake Core
//!
//! The request → validate → submit flow behind the intake form.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `FormState`: What the user has currently typed/selected
//!   - `OptionsCatalog`: Occupation/state choices from the remote API
//!   - `validate`: First-match-wins validator
//!   - `SubmissionPayload`: Validated payload carrying a hashed password
//!   - `FormSession`: Single owner of form state + catalog for a shell
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `IntakeApi`: Driving port used by presentation shells
//!   - `FormEndpoint`: Driven port for the remote form API
//!   - `CredentialHasher`: Driven port for password hashing
//!
//! - **Adapters Layer** (`adapters/`): External connections
//!   - `HttpFormEndpoint`: reqwest client for the remote API
//!   - `BcryptHasher`: bcrypt with a fresh salt per call
//!
//! - **Service Layer** (`service.rs`): `IntakeService` implements `IntakeApi`
//!
//! ## Flow
//!
//! ```text
//! shell mounts ──load_options──→ GET  <endpoint> ──→ OptionsCatalog
//! user submits ──submit──→ validate ──→ hash ──→ POST <endpoint> ──→ SubmitOutcome
//! ```
//!
//! ## Invariants
//!
//! - A `SubmissionPayload` can only be built from a `ValidatedForm` and a
//!   `HashedPassword`; the plaintext never reaches the wire.
//! - The validator returns the first matching outcome in a fixed order.
//!
//! ## Usage
//!
//! ```ignore
//! use intake_core::{IntakeApi, IntakeConfig, IntakeService};
//!
//! let service = IntakeService::connect(&IntakeConfig::default())?;
//! let catalog = service.load_options().await?;
//! let outcome = service.submit(form_state).await;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{BcryptHasher, HttpFormEndpoint};
pub use domain::{
    validate, ApiConfig, ConfigError, CredentialConfig, FormField, FormSession, FormState,
    HashedPassword, IntakeConfig, Notification, NotificationKind, OptionsCatalog, StateOption,
    SubmissionPayload, SubmitOutcome, ValidatedForm, ValidationFailure, ValidationOutcome,
    DEFAULT_BCRYPT_COST, DEFAULT_ENDPOINT, OCCUPATION_PLACEHOLDER, STATE_PLACEHOLDER,
};
pub use error::{ApiError, CredentialError, SetupError};
pub use ports::{CredentialHasher, FormEndpoint, IntakeApi, SubmitResponse};
pub use service::IntakeService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
