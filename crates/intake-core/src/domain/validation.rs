//! Form validation.
//!
//! First match wins, in this order:
//!
//! 1. every rule holds → `Valid`
//! 2. empty name → `MissingName`
//! 3. empty email → `MissingEmail`
//! 4. password under 8 chars → `PasswordTooShort`
//! 5. occupation empty or placeholder → `MissingOccupation`
//! 6. state empty or placeholder → `MissingState`
//! 7. anything else → `Generic`
//!
//! There is no dedicated branch for a malformed but non-empty email; it lands
//! in `Generic`.

use regex::Regex;
use std::sync::LazyLock;

use super::catalog::{OCCUPATION_PLACEHOLDER, STATE_PLACEHOLDER};
use super::form::FormState;
use super::notification::Notification;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Structural email check: `x@y.z` with no whitespace.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is a valid regex"));

/// Why a form was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    MissingName,
    MissingEmail,
    PasswordTooShort,
    MissingOccupation,
    MissingState,
    /// Check the form and try again
    Generic,
}

impl ValidationFailure {
    pub fn notification(&self) -> Notification {
        let text = match self {
            ValidationFailure::MissingName => "Please enter your name",
            ValidationFailure::MissingEmail => "Please enter your email address",
            ValidationFailure::PasswordTooShort => "Password must be at least 8 characters long",
            ValidationFailure::MissingOccupation => "Please choose an occupation",
            ValidationFailure::MissingState => "Please choose your state",
            ValidationFailure::Generic => "Check the form and try again",
        };
        Notification::validation(text)
    }
}

/// Result of validating a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(ValidationFailure),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn is_email_like(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn is_selected(value: &str, placeholder: &str) -> bool {
    char_len(value) > 1 && value != placeholder
}

fn is_unselected(value: &str, placeholder: &str) -> bool {
    value.is_empty() || value == placeholder
}

/// Validate a form snapshot.
pub fn validate(state: &FormState) -> ValidationOutcome {
    let all_hold = char_len(&state.name) >= 1
        && is_email_like(&state.email)
        && char_len(&state.password) >= MIN_PASSWORD_LEN
        && is_selected(&state.occupation, OCCUPATION_PLACEHOLDER)
        && is_selected(&state.home_state, STATE_PLACEHOLDER);

    if all_hold {
        return ValidationOutcome::Valid;
    }

    let failure = if state.name.is_empty() {
        ValidationFailure::MissingName
    } else if state.email.is_empty() {
        ValidationFailure::MissingEmail
    } else if char_len(&state.password) < MIN_PASSWORD_LEN {
        ValidationFailure::PasswordTooShort
    } else if is_unselected(&state.occupation, OCCUPATION_PLACEHOLDER) {
        ValidationFailure::MissingOccupation
    } else if is_unselected(&state.home_state, STATE_PLACEHOLDER) {
        ValidationFailure::MissingState
    } else {
        ValidationFailure::Generic
    };

    ValidationOutcome::Invalid(failure)
}

/// A form that passed validation. Only obtainable through [`ValidatedForm::check`].
#[derive(Debug, Clone)]
pub struct ValidatedForm(FormState);

impl ValidatedForm {
    pub fn check(state: FormState) -> Result<Self, ValidationFailure> {
        match validate(&state) {
            ValidationOutcome::Valid => Ok(Self(state)),
            ValidationOutcome::Invalid(failure) => Err(failure),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.0
    }

    pub fn into_inner(self) -> FormState {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_form() -> FormState {
        FormState {
            name: "Ana".into(),
            email: "a@b.com".into(),
            password: "password1".into(),
            occupation: "Engineer".into(),
            home_state: "Ohio".into(),
        }
    }

    fn failure_of(state: &FormState) -> Option<ValidationFailure> {
        match validate(state) {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(f) => Some(f),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(validate(&valid_form()).is_valid());
    }

    #[test]
    fn test_missing_name() {
        let state = FormState {
            name: String::new(),
            ..valid_form()
        };
        assert_eq!(failure_of(&state), Some(ValidationFailure::MissingName));
    }

    #[test]
    fn test_missing_email() {
        let state = FormState {
            email: String::new(),
            ..valid_form()
        };
        assert_eq!(failure_of(&state), Some(ValidationFailure::MissingEmail));
    }

    #[test]
    fn test_password_length_boundary() {
        let seven = FormState {
            password: "1234567".into(),
            ..valid_form()
        };
        assert_eq!(failure_of(&seven), Some(ValidationFailure::PasswordTooShort));

        let eight = FormState {
            password: "12345678".into(),
            ..valid_form()
        };
        assert!(validate(&eight).is_valid());
    }

    #[test]
    fn test_password_length_counts_chars() {
        let state = FormState {
            password: "ñññññññ".into(),
            ..valid_form()
        };
        assert_eq!(failure_of(&state), Some(ValidationFailure::PasswordTooShort));
    }

    #[test]
    fn test_astral_password_counts_characters_not_utf16_units() {
        // Four characters, eight UTF-16 units
        let state = FormState {
            password: "😀😀😀😀".into(),
            ..valid_form()
        };
        assert_eq!(failure_of(&state), Some(ValidationFailure::PasswordTooShort));

        let eight = FormState {
            password: "😀".repeat(8),
            ..valid_form()
        };
        assert!(validate(&eight).is_valid());
    }

    #[test]
    fn test_occupation_placeholder_rejected() {
        let state = FormState {
            occupation: "Occupation".into(),
            ..valid_form()
        };
        assert_eq!(failure_of(&state), Some(ValidationFailure::MissingOccupation));

        let empty = FormState {
            occupation: String::new(),
            ..valid_form()
        };
        assert_eq!(failure_of(&empty), Some(ValidationFailure::MissingOccupation));
    }

    #[test]
    fn test_state_placeholder_rejected() {
        let state = FormState {
            home_state: "State".into(),
            ..valid_form()
        };
        assert_eq!(failure_of(&state), Some(ValidationFailure::MissingState));
    }

    #[test]
    fn test_malformed_email_falls_through_to_generic() {
        let state = FormState {
            email: "not-an-email".into(),
            ..valid_form()
        };
        assert_eq!(failure_of(&state), Some(ValidationFailure::Generic));
    }

    #[test]
    fn test_single_char_occupation_is_generic() {
        // Too short to count as selected, but neither empty nor the placeholder.
        let state = FormState {
            occupation: "X".into(),
            ..valid_form()
        };
        assert_eq!(failure_of(&state), Some(ValidationFailure::Generic));
    }

    #[test]
    fn test_earlier_failure_wins() {
        let state = FormState {
            name: "Ana".into(),
            email: String::new(),
            password: "short".into(),
            occupation: String::new(),
            home_state: String::new(),
        };
        assert_eq!(failure_of(&state), Some(ValidationFailure::MissingEmail));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_email_like("a@b.co"));
        assert!(is_email_like("first.last@sub.example.org"));
        assert!(!is_email_like("a@b"));
        assert!(!is_email_like("a b@c.d"));
        assert!(!is_email_like("@b.com"));
        assert!(!is_email_like(""));
    }

    #[test]
    fn test_validated_form_check() {
        assert!(ValidatedForm::check(valid_form()).is_ok());
        let err = ValidatedForm::check(FormState::default()).unwrap_err();
        assert_eq!(err, ValidationFailure::MissingName);
    }

    #[test]
    fn test_every_failure_has_distinct_message() {
        let failures = [
            ValidationFailure::MissingName,
            ValidationFailure::MissingEmail,
            ValidationFailure::PasswordTooShort,
            ValidationFailure::MissingOccupation,
            ValidationFailure::MissingState,
            ValidationFailure::Generic,
        ];
        let texts: std::collections::HashSet<_> =
            failures.iter().map(|f| f.notification().text).collect();
        assert_eq!(texts.len(), failures.len());
    }

    fn token() -> impl Strategy<Value = String> {
        "[A-Za-z0-9]{1,12}"
    }

    fn valid_states() -> impl Strategy<Value = FormState> {
        (
            "[A-Za-z ]{1,20}",
            (token(), token(), "[a-z]{2,6}"),
            "[!-~]{8,32}",
            "[A-Za-z]{2,16}",
            "[A-Za-z]{2,16}",
        )
            .prop_filter("placeholders are not selections", |(_, _, _, occ, st)| {
                occ != OCCUPATION_PLACEHOLDER && st != STATE_PLACEHOLDER
            })
            .prop_map(|(name, (user, host, tld), password, occupation, home_state)| FormState {
                name,
                email: format!("{}@{}.{}", user, host, tld),
                password,
                occupation,
                home_state,
            })
    }

    proptest! {
        #[test]
        fn prop_well_formed_forms_are_valid(state in valid_states()) {
            prop_assert!(validate(&state).is_valid());
        }

        #[test]
        fn prop_empty_name_always_missing_name(
            email in ".{0,20}",
            password in ".{0,20}",
            occupation in ".{0,20}",
            home_state in ".{0,20}",
        ) {
            let state = FormState { name: String::new(), email, password, occupation, home_state };
            prop_assert_eq!(failure_of(&state), Some(ValidationFailure::MissingName));
        }
    }
}
