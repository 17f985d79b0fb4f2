//! Modal notification, styled by kind.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use intake_core::{Notification, NotificationKind};

use super::centered_rect;

pub fn render_notification(frame: &mut Frame, notice: &Notification) {
    let (color, icon) = match notice.kind {
        NotificationKind::Success => (Color::Green, "✔"),
        NotificationKind::Error => (Color::Red, "✖"),
    };

    let body = vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("{} {}", icon, notice.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(notice.text),
        Line::raw(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup_area = centered_rect(50, body.len() as u16 + 2, frame.area());
    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(paragraph, popup_area);
}
