//! Intake TUI: the intake form in a terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  INTAKE v0.1.0   Options loaded 14:02:11          [F1]Help [Esc]│
//! └─────────────────────────────────────────────────────────────────┘
//!                    Welcome to the Home Page!
//! ┌ Name ───────────────────────────────────────────────────────────┐
//! ┌ Email ──────────────────────────────────────────────────────────┐
//! ┌ Password ───────────────────────────────────────────────────────┐
//! ┌ Select Your Occupation ─────────────────────────────────────────┐
//! ┌ Select Your State ──────────────────────────────────────────────┐
//! [ Submit ]
//! ```
//!
//! The event loop owns [`App`]; network work runs on spawned tasks that send
//! a [`ShellEvent`] back over a channel.

pub mod domain;
pub mod ui;

pub use domain::{Action, App, AppState, Focus, OptionsStatus, ShellEvent};
