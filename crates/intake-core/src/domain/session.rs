//! Form session: the single owner of form state and options for one shell.

use super::catalog::OptionsCatalog;
use super::form::{FormField, FormState};
use super::notification::Notification;
use super::outcome::SubmitOutcome;

/// Form state plus the options catalog, mutated only by the shell that owns it.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    state: FormState,
    catalog: OptionsCatalog,
    options_loaded: bool,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn catalog(&self) -> &OptionsCatalog {
        &self.catalog
    }

    /// Whether the one-shot options fetch has succeeded.
    pub fn options_loaded(&self) -> bool {
        self.options_loaded
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.state.set(field, value);
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.set(FormField::Name, value);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.set(FormField::Email, value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.set(FormField::Password, value);
    }

    pub fn set_occupation(&mut self, value: impl Into<String>) {
        self.set(FormField::Occupation, value);
    }

    pub fn set_home_state(&mut self, value: impl Into<String>) {
        self.set(FormField::HomeState, value);
    }

    /// Replace both option lists with what the server sent.
    pub fn apply_catalog(&mut self, catalog: OptionsCatalog) {
        self.catalog = catalog;
        self.options_loaded = true;
    }

    /// Record a failed options fetch. Lists stay empty.
    pub fn options_failed(&mut self) -> Notification {
        self.catalog = OptionsCatalog::default();
        self.options_loaded = false;
        Notification::options_unavailable()
    }

    /// Apply a submit outcome. Clears the form only when the server accepted it.
    pub fn apply_outcome(&mut self, outcome: &SubmitOutcome) -> Notification {
        if outcome.is_accepted() {
            self.state.clear();
        }
        outcome.notification()
    }
}
