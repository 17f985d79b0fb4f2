//! Submission payload sent to the remote form API.

use serde::Serialize;

use super::validation::ValidatedForm;

/// Self-describing one-way hash of a password (algorithm, cost, salt, digest).
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Only the service builds these, from credential hasher output.
    pub(crate) fn new(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Algorithm and cost prefix only, e.g. `$2b$10$…`
        let prefix: String = self.0.chars().take(7).collect();
        write!(f, "HashedPassword({}…)", prefix)
    }
}

/// Validated form with the password replaced by its hash. Immutable.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionPayload {
    name: String,
    email: String,
    password: HashedPassword,
    occupation: String,
    state: String,
}

impl SubmissionPayload {
    pub fn new(form: ValidatedForm, password: HashedPassword) -> Self {
        let state = form.into_inner();
        Self {
            name: state.name,
            email: state.email,
            password,
            occupation: state.occupation,
            state: state.home_state,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &HashedPassword {
        &self.password
    }

    pub fn occupation(&self) -> &str {
        &self.occupation
    }

    pub fn state(&self) -> &str {
        &self.state
    }
}
