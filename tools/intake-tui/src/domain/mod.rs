//! Shell state: focus, selections and the notification queue around a
//! [`FormSession`](intake_core::FormSession).

mod app;
mod event;
mod focus;

pub use app::{Action, App, AppState, OptionsStatus};
pub use event::ShellEvent;
pub use focus::Focus;
