//! Form state: what the user has currently entered.

/// One of the five editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
    Occupation,
    HomeState,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Password,
        FormField::Occupation,
        FormField::HomeState,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Password => "Password",
            FormField::Occupation => "Select Your Occupation",
            FormField::HomeState => "Select Your State",
        }
    }

    /// Dropdown-backed fields take their value from the options catalog.
    pub fn is_select(&self) -> bool {
        matches!(self, FormField::Occupation | FormField::HomeState)
    }
}

/// Mutable snapshot of the form. The password is plaintext and never leaves
/// the process unhashed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub occupation: String,
    pub home_state: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::Occupation => &self.occupation,
            FormField::HomeState => &self.home_state,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::Occupation => &mut self.occupation,
            FormField::HomeState => &mut self.home_state,
        };
        *slot = value.into();
    }

    /// Back to all-empty strings.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

// Keep the plaintext password out of logs.
impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("occupation", &self.occupation)
            .field("home_state", &self.home_state)
            .finish()
    }
}
