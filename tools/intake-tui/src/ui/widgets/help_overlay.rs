//! Help overlay widget.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

fn key_line(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ])
}

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let help_text = vec![
        Line::from(Span::styled(
            "INTAKE FORM HELP",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        key_line("  Tab / ↓        ", "Next field"),
        key_line("  Shift-Tab / ↑  ", "Previous field"),
        key_line("  ← / →          ", "Change occupation or state"),
        Line::raw(""),
        Line::from(Span::styled(
            "Actions",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        key_line("  Enter          ", "Submit (on the button) or next field"),
        key_line("  Ctrl-S         ", "Submit from anywhere"),
        key_line("  F1             ", "Toggle this help"),
        key_line("  Esc / Ctrl-C   ", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup_area = centered_rect(60, help_text.len() as u16 + 2, frame.area());
    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}
