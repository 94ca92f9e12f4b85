//! Idea panel component.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, DisplayState};
use crate::tui::theme::*;

use super::wrap_text;

/// Render the panel holding the currently picked prompt.
///
/// Before the first pick the panel shows a hint instead; once a prompt has
/// been picked the previous text is fully replaced on every activation.
pub fn render_idea_panel(frame: &mut Frame, area: Rect, app: &App) {
    // Borders plus one column of padding on each side
    let text_width = area.width.saturating_sub(4) as usize;

    let mut lines: Vec<Line> = vec![Line::raw("")];

    match &app.display {
        DisplayState::Empty => {
            let hint = match app.keymap.trigger_label() {
                Some(label) => format!("Press {} or click the button below", label),
                None => "Prompt picking is disabled (trigger_key = \"none\")".to_string(),
            };
            lines.push(Line::styled(format!(" {}", hint), Style::new().fg(TEXT_DIM)));
        }
        DisplayState::Showing(text) => {
            for wrapped in wrap_text(text, text_width) {
                lines.push(Line::styled(
                    format!(" {}", wrapped),
                    Style::new().fg(TEXT_WHITE),
                ));
            }
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(BORDER_DIM))
        .title(" Idea ")
        .title_style(Style::new().fg(LOGO_GOLD).bold());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
