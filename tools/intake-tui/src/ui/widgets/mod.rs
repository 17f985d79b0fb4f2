//! Modal overlays.

mod help_overlay;
mod notification_overlay;

pub use help_overlay::render_help_overlay;
pub use notification_overlay::render_notification;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Create a centered rectangle.
pub(crate) fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
