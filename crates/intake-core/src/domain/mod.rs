//! Domain types for the intake form.
//!
//! Data-only: nothing in here touches the network or the clock.

pub mod catalog;
pub mod config;
pub mod form;
pub mod notification;
pub mod outcome;
pub mod payload;
pub mod session;
pub mod validation;

// Re-exports for convenience
pub use catalog::{OptionsCatalog, StateOption, OCCUPATION_PLACEHOLDER, STATE_PLACEHOLDER};
pub use config::{
    ApiConfig, ConfigError, CredentialConfig, IntakeConfig, DEFAULT_BCRYPT_COST, DEFAULT_ENDPOINT,
};
pub use form::{FormField, FormState};
pub use notification::{Notification, NotificationKind};
pub use outcome::SubmitOutcome;
pub use payload::{HashedPassword, SubmissionPayload};
pub use session::FormSession;
pub use validation::{validate, ValidatedForm, ValidationFailure, ValidationOutcome};
