//! Submission outcomes.

use super::notification::Notification;
use super::validation::ValidationFailure;

/// What happened to a submit attempt, tagged so the shell can branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validator rejected the form; nothing was sent
    Invalid(ValidationFailure),
    /// Server answered 200
    Accepted,
    /// Server answered with any other status
    Rejected { status: u16 },
    /// No response (connect error, timeout, broken body)
    TransportFailed,
    /// Failed before anything was sent (hashing, encoding, request setup)
    RequestInvalid,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }

    pub fn notification(&self) -> Notification {
        match self {
            SubmitOutcome::Invalid(failure) => failure.notification(),
            SubmitOutcome::Accepted => Notification::submitted(),
            SubmitOutcome::Rejected { .. }
            | SubmitOutcome::TransportFailed
            | SubmitOutcome::RequestInvalid => Notification::not_submitted(),
        }
    }
}
