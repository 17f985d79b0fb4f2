//! Inbound Ports (Driving Ports)
//!
//! The API a presentation shell drives.

use async_trait::async_trait;

use crate::domain::{FormState, OptionsCatalog, SubmitOutcome};
use crate::error::ApiError;

/// Primary intake API (Driving Port)
#[async_trait]
pub trait IntakeApi: Send + Sync {
    /// Fetch occupation and state choices. Called once per shell session.
    async fn load_options(&self) -> Result<OptionsCatalog, ApiError>;

    /// Validate, hash and send a form snapshot.
    ///
    /// Never fails outright: every path ends in a tagged [`SubmitOutcome`].
    async fn submit(&self, state: FormState) -> SubmitOutcome;
}
