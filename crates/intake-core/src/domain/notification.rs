//! User-facing notifications.

/// Success or error styling for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A dismissible message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub text: &'static str,
    pub kind: NotificationKind,
}

impl Notification {
    pub const fn new(title: &'static str, text: &'static str, kind: NotificationKind) -> Self {
        Self { title, text, kind }
    }

    /// Form rejected by the validator.
    pub const fn validation(text: &'static str) -> Self {
        Self::new("Something Went Wrong!", text, NotificationKind::Error)
    }

    /// Remote API accepted the submission.
    pub const fn submitted() -> Self {
        Self::new(
            "Data Submitted!",
            "You've successfully sent data to the Fetch Rewards API",
            NotificationKind::Success,
        )
    }

    /// Submission failed anywhere between hashing and the response.
    pub const fn not_submitted() -> Self {
        Self::new(
            "Data Not Submitted!",
            "There's been an error, please try again",
            NotificationKind::Error,
        )
    }

    /// Options fetch failed; the dropdowns stay empty for the session.
    pub const fn options_unavailable() -> Self {
        Self::new(
            "Something went wrong!",
            "Check your connection or reload the page",
            NotificationKind::Error,
        )
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}
