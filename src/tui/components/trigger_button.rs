//! Trigger button component.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, ClickRegion};
use crate::tui::theme::*;

/// Render the "new idea" button and record its click region.
///
/// Callers skip this entirely when no trigger is bound, leaving the click
/// region empty so mouse clicks fall through.
pub fn render_trigger_button(frame: &mut Frame, area: Rect, app: &mut App) {
    let label = match app.keymap.trigger_label() {
        Some(key) => format!("[ New idea ({}) ]", key),
        None => return,
    };

    // Center the button horizontally within the given row
    let width = label.chars().count() as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let button_area = Rect::new(x, area.y, width.min(area.width), 1);

    app.click_areas.trigger_button = ClickRegion::from_rect(button_area);

    let line = Line::from(Span::styled(label, Style::new().fg(LOGO_GOLD).bold()));
    frame.render_widget(Paragraph::new(line), button_area);
}
