//! Main layout orchestration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  INTAKE v0.1.0   Options loaded 14:02:11          [F1]Help [Esc]│
//! └─────────────────────────────────────────────────────────────────┘
//!                    Welcome to the Home Page!
//!          Please use the form below to submit your information
//! ┌ Name ───────────────────────────────────────────────────────────┐
//! │ ...                                                             │
//! ...
//! │  [Tab/↓] Next  [Shift-Tab/↑] Prev  [←→] Choose  [Enter] Submit  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::{App, AppState, OptionsStatus};

use super::{form_panel, widgets};

const HERO_TITLE: &str = "Welcome to the Home Page!";
const HERO_TEXT: &str =
    "Please use the form below to submit your information to the Fetch Rewards API.";

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Hero
            Constraint::Min(10),   // Form
            Constraint::Length(3), // Footer (keybinds)
        ])
        .split(size);

    render_header(frame, main_chunks[0], app);
    render_hero(frame, main_chunks[1]);
    form_panel::render(frame, main_chunks[2], app);
    render_footer(frame, main_chunks[3]);

    if app.state == AppState::Help {
        widgets::render_help_overlay(frame);
    }

    // Notifications sit above everything, help included
    if let Some(notice) = app.notice() {
        widgets::render_notification(frame, notice);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = vec![
        Span::styled(
            " INTAKE ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("v{}", intake_core::VERSION),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let status = match app.options_status() {
        OptionsStatus::Loading => Span::styled(
            "  Loading options... ",
            Style::default().fg(Color::DarkGray),
        ),
        OptionsStatus::Loaded { at } => Span::styled(
            format!("  Options loaded {} ", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ),
        OptionsStatus::Failed => {
            Span::styled("  ⚠ Options unavailable ", Style::default().fg(Color::Red))
        }
    };

    let sending = if app.in_flight() > 0 {
        Span::styled(
            format!(" Sending ({}) ", app.in_flight()),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::raw("")
    };

    let hints = vec![
        Span::styled("[F1]", Style::default().fg(Color::Yellow)),
        Span::raw("Help "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw("Quit "),
    ];

    let used: usize = title
        .iter()
        .chain(hints.iter())
        .chain([&status, &sending])
        .map(|s| s.content.chars().count())
        .sum();
    let padding = (area.width as usize).saturating_sub(used + 2);

    let mut spans = title;
    spans.push(status);
    spans.push(sending);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.extend(hints);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(HERO_TEXT, Style::default().fg(Color::Gray))),
    ])
    .wrap(Wrap { trim: true })
    .centered();

    frame.render_widget(hero, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let keybinds = vec![
        Span::styled("[Tab/↓]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Shift-Tab/↑]", Style::default().fg(Color::Yellow)),
        Span::raw(" Prev  "),
        Span::styled("[←→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Choose  "),
        Span::styled("[Ctrl-S]", Style::default().fg(Color::Yellow)),
        Span::raw(" Submit  "),
    ];

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}
