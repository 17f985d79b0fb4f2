//! Focus ring over the form.

use intake_core::FormField;

/// What the cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    Submit,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FormField::Name)
    }
}

impl Focus {
    /// Ring order: the five fields, then the submit button.
    pub const RING: [Focus; 6] = [
        Focus::Field(FormField::Name),
        Focus::Field(FormField::Email),
        Focus::Field(FormField::Password),
        Focus::Field(FormField::Occupation),
        Focus::Field(FormField::HomeState),
        Focus::Submit,
    ];

    fn position(&self) -> usize {
        Self::RING.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::RING[(self.position() + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        let idx = self.position();
        if idx == 0 {
            Self::RING[Self::RING.len() - 1]
        } else {
            Self::RING[idx - 1]
        }
    }

    pub fn field(&self) -> Option<FormField> {
        match self {
            Focus::Field(field) => Some(*field),
            Focus::Submit => None,
        }
    }
}
