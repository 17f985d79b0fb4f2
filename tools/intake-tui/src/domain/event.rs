//! Results delivered back to the shell loop by spawned tasks.

use intake_core::{ApiError, OptionsCatalog, SubmitOutcome};

#[derive(Debug)]
pub enum ShellEvent {
    /// The one-shot options fetch finished.
    OptionsLoaded(Result<OptionsCatalog, ApiError>),
    /// A submission finished.
    Submitted(SubmitOutcome),
}
