//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::tui::theme::*;

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect, app: &App) {
    // Calculate centered popup area
    let popup_width = 46u16;
    let popup_height = 12u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![];

    lines.push(Line::from(vec![Span::styled(
        "Keyboard Shortcuts",
        Style::new().fg(TEXT_WHITE).bold(),
    )]));
    lines.push(Line::raw(""));

    match app.keymap.trigger_label() {
        Some(label) => {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<8}", label), Style::new().fg(TEXT_WHITE)),
                Span::styled("Pick a new idea", Style::new().fg(TEXT_DIM)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("  click   ", Style::new().fg(TEXT_WHITE)),
                Span::styled("The button works too", Style::new().fg(TEXT_DIM)),
            ]));
        }
        None => {
            lines.push(Line::styled(
                "  Picking disabled by config",
                Style::new().fg(TEXT_DIM),
            ));
        }
    }
    lines.push(Line::from(vec![
        Span::styled("  ?       ", Style::new().fg(TEXT_WHITE)),
        Span::styled("Toggle this help", Style::new().fg(TEXT_DIM)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  q       ", Style::new().fg(TEXT_WHITE)),
        Span::styled("Quit", Style::new().fg(TEXT_DIM)),
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("Config: ", Style::new().fg(TEXT_DIM)),
        Span::styled(
            crate::config::Config::config_path().display().to_string(),
            Style::new().fg(LOGO_LIGHT_BLUE),
        ),
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("Press ", Style::new().fg(TEXT_DIM)),
        Span::styled("?", Style::new().fg(TEXT_WHITE)),
        Span::styled(" or ", Style::new().fg(TEXT_DIM)),
        Span::styled("Esc", Style::new().fg(TEXT_WHITE)),
        Span::styled(" to close", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_LIGHT_BLUE))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}
