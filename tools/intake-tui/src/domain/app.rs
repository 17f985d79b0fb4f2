//! Application state management.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use intake_core::{validate, FormField, FormSession, FormState, Notification, SubmitOutcome};

use super::{Focus, ShellEvent};

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Form view.
    #[default]
    Form,
    /// Help overlay.
    Help,
    /// Quitting.
    Quit,
}

/// Progress of the one-shot options fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionsStatus {
    #[default]
    Loading,
    Loaded { at: DateTime<Local> },
    Failed,
}

/// Side effect requested by a key press; the event loop carries it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// Submit this snapshot of the form.
    Submit(FormState),
}

/// Main application model.
#[derive(Debug, Default)]
pub struct App {
    session: FormSession,
    /// Current application state/view.
    pub state: AppState,
    /// What the cursor is on.
    pub focus: Focus,
    /// Displayed option per dropdown; 0 is the placeholder.
    occupation_index: usize,
    state_index: usize,
    /// Pending modal notifications, oldest first.
    notices: VecDeque<Notification>,
    options_status: OptionsStatus,
    in_flight: usize,
}

impl App {
    /// Create a new application instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    /// The notification currently on screen, if any.
    pub fn notice(&self) -> Option<&Notification> {
        self.notices.front()
    }

    pub fn options_status(&self) -> OptionsStatus {
        self.options_status
    }

    /// Submissions that passed validation and are awaiting the server.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }

    /// Dropdown choices for a select field, placeholder first.
    pub fn choices(&self, field: FormField) -> Vec<&str> {
        let catalog = self.session.catalog();
        match field {
            FormField::Occupation => catalog.occupation_choices(),
            FormField::HomeState => catalog.state_choices(),
            _ => Vec::new(),
        }
    }

    /// Index of the option a dropdown is showing.
    pub fn selected_index(&self, field: FormField) -> usize {
        match field {
            FormField::Occupation => self.occupation_index,
            FormField::HomeState => self.state_index,
            _ => 0,
        }
    }

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.state = AppState::Quit;
            return Action::None;
        }

        // Any key dismisses the front notification
        if self.notices.pop_front().is_some() {
            return Action::None;
        }

        match self.state {
            AppState::Form => self.handle_form_key(key.code, ctrl),
            AppState::Help => {
                self.state = AppState::Form;
                Action::None
            }
            AppState::Quit => Action::None,
        }
    }

    fn handle_form_key(&mut self, code: KeyCode, ctrl: bool) -> Action {
        match code {
            KeyCode::Esc => self.state = AppState::Quit,
            KeyCode::F(1) => self.state = AppState::Help,
            KeyCode::Char('s') if ctrl => return self.submit(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                Focus::Submit => return self.submit(),
                Focus::Field(_) => self.focus = self.focus.next(),
            },
            KeyCode::Left | KeyCode::Right => {
                if let Some(field) = self.focus.field().filter(FormField::is_select) {
                    self.cycle_select(field, code == KeyCode::Right);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focused_text_field() {
                    let mut value = self.session.state().get(field).to_string();
                    value.pop();
                    self.session.set(field, value);
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = self.focused_text_field() {
                    let mut value = self.session.state().get(field).to_string();
                    value.push(c);
                    self.session.set(field, value);
                }
            }
            _ => {}
        }
        Action::None
    }

    fn focused_text_field(&self) -> Option<FormField> {
        self.focus.field().filter(|f| !f.is_select())
    }

    /// Move a dropdown and fire its change: the field takes the shown
    /// option's value, placeholder text included.
    fn cycle_select(&mut self, field: FormField, forward: bool) {
        let choices: Vec<String> = self.choices(field).into_iter().map(str::to_string).collect();
        let len = choices.len();
        if len < 2 {
            return;
        }

        let index = match field {
            FormField::Occupation => &mut self.occupation_index,
            FormField::HomeState => &mut self.state_index,
            _ => return,
        };
        *index = if forward {
            (*index + 1) % len
        } else {
            (*index + len - 1) % len
        };

        let value = choices[*index].clone();
        debug!(?field, %value, "Dropdown changed");
        self.session.set(field, value);
    }

    fn submit(&mut self) -> Action {
        // Invalid forms come straight back without touching the network
        if validate(self.session.state()).is_valid() {
            self.in_flight += 1;
        }
        info!(in_flight = self.in_flight, "Submitting form");
        Action::Submit(self.session.state().clone())
    }

    fn reset_selects(&mut self) {
        self.occupation_index = 0;
        self.state_index = 0;
    }

    /// Apply a result delivered by a background task.
    pub fn apply(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::OptionsLoaded(Ok(catalog)) => {
                self.session.apply_catalog(catalog);
                self.reset_selects();
                self.options_status = OptionsStatus::Loaded { at: Local::now() };
            }
            ShellEvent::OptionsLoaded(Err(_)) => {
                let alert = self.session.options_failed();
                self.reset_selects();
                self.options_status = OptionsStatus::Failed;
                self.notices.push_back(alert);
            }
            ShellEvent::Submitted(outcome) => {
                if !matches!(outcome, SubmitOutcome::Invalid(_)) {
                    self.in_flight = self.in_flight.saturating_sub(1);
                }
                let note = self.session.apply_outcome(&outcome);
                if outcome.is_accepted() {
                    self.reset_selects();
                    self.focus = Focus::default();
                }
                self.notices.push_back(note);
            }
        }
    }
}
