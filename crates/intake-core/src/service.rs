//! Intake Service
//!
//! Orchestrates validation, credential preparation and submission against the
//! injected driven ports.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::adapters::{BcryptHasher, HttpFormEndpoint};
use crate::domain::{
    FormState, HashedPassword, IntakeConfig, OptionsCatalog, SubmissionPayload, SubmitOutcome,
    ValidatedForm,
};
use crate::error::{ApiError, CredentialError, SetupError};
use crate::ports::{CredentialHasher, FormEndpoint, IntakeApi};

/// Intake Service implementation
///
/// Implements the `IntakeApi` port using injected dependencies.
pub struct IntakeService<E: FormEndpoint, H: CredentialHasher> {
    /// Remote form API (driven port)
    endpoint: Arc<E>,
    /// Password hasher (driven port)
    hasher: Arc<H>,
}

impl IntakeService<HttpFormEndpoint, BcryptHasher> {
    /// Wire the production adapters from configuration.
    pub fn connect(config: &IntakeConfig) -> Result<Self, SetupError> {
        config.validate()?;
        let endpoint = HttpFormEndpoint::new(&config.api)?;
        let hasher = BcryptHasher::new(config.credential.cost);

        info!(
            endpoint = %endpoint.endpoint(),
            bcrypt_cost = config.credential.cost,
            "Intake service configured"
        );

        Ok(Self::new(Arc::new(endpoint), Arc::new(hasher)))
    }
}

impl<E: FormEndpoint, H: CredentialHasher + 'static> IntakeService<E, H> {
    /// Create a new service with the given ports
    pub fn new(endpoint: Arc<E>, hasher: Arc<H>) -> Self {
        Self { endpoint, hasher }
    }

    /// Hash on the blocking pool; bcrypt is deliberately slow.
    async fn prepare_credential(&self, plaintext: String) -> Result<HashedPassword, CredentialError> {
        let hasher = Arc::clone(&self.hasher);
        let (plaintext, hash) = tokio::task::spawn_blocking(move || {
            let hash = hasher.hash(&plaintext);
            (plaintext, hash)
        })
        .await
        .map_err(|e| CredentialError::Aborted(e.to_string()))?;

        let hash = hash?;
        if hash == plaintext {
            return Err(CredentialError::PlaintextEcho);
        }
        Ok(HashedPassword::new(hash))
    }

    fn interpret(result: Result<crate::ports::SubmitResponse, ApiError>) -> SubmitOutcome {
        match result {
            Ok(response) if response.status == 200 => {
                info!("Submission accepted");
                SubmitOutcome::Accepted
            }
            Ok(response) => {
                warn!(
                    status = response.status,
                    body = %response.body,
                    headers = ?response.headers,
                    "Submission rejected by server"
                );
                SubmitOutcome::Rejected {
                    status: response.status,
                }
            }
            Err(e) if e.is_request_setup() => {
                error!(error = %e, "Submission request could not be built");
                SubmitOutcome::RequestInvalid
            }
            Err(e) => {
                warn!(error = %e, "No response to submission");
                SubmitOutcome::TransportFailed
            }
        }
    }
}

#[async_trait]
impl<E, H> IntakeApi for IntakeService<E, H>
where
    E: FormEndpoint + 'static,
    H: CredentialHasher + 'static,
{
    async fn load_options(&self) -> Result<OptionsCatalog, ApiError> {
        match self.endpoint.fetch_options().await {
            Ok(catalog) => {
                info!(
                    occupations = catalog.occupations.len(),
                    states = catalog.states.len(),
                    "Options catalog loaded"
                );
                Ok(catalog)
            }
            Err(e) => {
                error!(
                    error = %e,
                    "Unfortunately, we cannot reach important data at the moment."
                );
                Err(e)
            }
        }
    }

    async fn submit(&self, state: FormState) -> SubmitOutcome {
        let form = match ValidatedForm::check(state) {
            Ok(form) => form,
            Err(failure) => {
                info!(?failure, "Form rejected by validator");
                return SubmitOutcome::Invalid(failure);
            }
        };

        let password = match self.prepare_credential(form.state().password.clone()).await {
            Ok(password) => password,
            Err(e) => {
                error!(error = %e, "Credential preparation failed");
                return SubmitOutcome::RequestInvalid;
            }
        };

        let payload = SubmissionPayload::new(form, password);
        Self::interpret(self.endpoint.submit(&payload).await)
    }
}
