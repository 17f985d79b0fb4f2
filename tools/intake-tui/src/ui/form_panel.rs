//! The form: three text inputs, two dropdowns and a submit button.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use intake_core::FormField;

use crate::domain::{App, Focus};

const PASSWORD_HELP: &str = "Password must be at least 8 characters long.";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let [name, email, password, password_help, occupation, home_state, submit] =
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(area);

    render_text_field(frame, name, app, FormField::Name);
    render_text_field(frame, email, app, FormField::Email);
    render_text_field(frame, password, app, FormField::Password);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", PASSWORD_HELP),
            Style::default().fg(Color::DarkGray),
        )),
        password_help,
    );
    render_select(frame, occupation, app, FormField::Occupation);
    render_select(frame, home_state, app, FormField::HomeState);
    render_submit(frame, submit, app);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(label: &str, focused: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(border_style(focused))
}

fn render_text_field(frame: &mut Frame, area: Rect, app: &App, field: FormField) {
    let focused = app.focus == Focus::Field(field);
    let raw = app.session().state().get(field);
    let shown = if field == FormField::Password {
        "*".repeat(raw.chars().count())
    } else {
        raw.to_string()
    };

    let mut spans = vec![Span::raw(shown)];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }

    let input = Paragraph::new(Line::from(spans)).block(field_block(field.label(), focused));
    frame.render_widget(input, area);
}

fn render_select(frame: &mut Frame, area: Rect, app: &App, field: FormField) {
    let focused = app.focus == Focus::Field(field);
    let choices = app.choices(field);
    let index = app.selected_index(field);
    let shown = choices.get(index).copied().unwrap_or_default();

    let style = if index == 0 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let arrow = if focused && choices.len() > 1 {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled("◀ ", arrow),
        Span::styled(shown.to_string(), style),
        Span::styled(" ▶", arrow),
        Span::styled(
            format!("   {}/{}", index + 1, choices.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let select = Paragraph::new(line).block(field_block(field.label(), focused));
    frame.render_widget(select, area);
}

fn render_submit(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Submit;
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue)
    };

    let [button] = Layout::horizontal([Constraint::Length(12)]).areas(area);
    let submit = Paragraph::new(Span::styled("Submit", style))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        );
    frame.render_widget(submit, button);
}
