//! Options catalog: the occupation and state choices served by the remote API.

use serde::{Deserialize, Serialize};

/// Leading "nothing selected" entry of the occupation dropdown.
pub const OCCUPATION_PLACEHOLDER: &str = "Occupation";

/// Leading "nothing selected" entry of the state dropdown.
pub const STATE_PLACEHOLDER: &str = "State";

/// A state choice. The API sends more fields than we need; only `name` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateOption {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
}

impl StateOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: None,
        }
    }
}

/// Valid dropdown choices. Empty until the options fetch resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsCatalog {
    /// Occupation choices, in server order
    pub occupations: Vec<String>,
    /// State choices, in server order
    pub states: Vec<StateOption>,
}

impl OptionsCatalog {
    pub fn new(occupations: Vec<String>, states: Vec<StateOption>) -> Self {
        Self {
            occupations,
            states,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.occupations.is_empty() && self.states.is_empty()
    }

    /// Occupation dropdown entries: placeholder first, then the catalog.
    pub fn occupation_choices(&self) -> Vec<&str> {
        std::iter::once(OCCUPATION_PLACEHOLDER)
            .chain(self.occupations.iter().map(String::as_str))
            .collect()
    }

    /// State dropdown entries: placeholder first, then the catalog.
    pub fn state_choices(&self) -> Vec<&str> {
        std::iter::once(STATE_PLACEHOLDER)
            .chain(self.states.iter().map(|s| s.name.as_str()))
            .collect()
    }
}
