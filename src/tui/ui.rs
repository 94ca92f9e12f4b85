use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, ClickAreas, InputMode};

use super::components::{render_help_popup, render_idea_panel, render_trigger_button};
use super::theme::*;

/// Widest the idea panel gets on large terminals.
const PANEL_MAX_WIDTH: u16 = 72;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Click areas are rebuilt from scratch every frame
    app.click_areas = ClickAreas::default();

    // Main vertical layout: logo, content, footer
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Logo + spacing
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Hotkeys + tip
    ])
    .split(area);

    render_logo(frame, main_layout[0]);

    // Content: idea panel above, button row below
    let content_layout = Layout::vertical([
        Constraint::Min(0),    // Idea panel
        Constraint::Length(1), // Trigger button
    ])
    .split(main_layout[1]);

    render_idea_panel(frame, centered(content_layout[0], PANEL_MAX_WIDTH), app);

    if app.trigger_bound() {
        render_trigger_button(frame, content_layout[1], app);
    }

    render_footer(frame, main_layout[2], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, area, app);
    }
}

/// Center a column of at most `width` columns within `area`.
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

fn render_logo(frame: &mut Frame, area: Rect) {
    // Center the colorful "spark" logo
    let padding = (area.width.saturating_sub(5)) / 2;
    let centered = Line::from(vec![
        Span::raw(" ".repeat(padding as usize)),
        Span::styled("s", Style::new().fg(LOGO_GOLD).bold()),
        Span::styled("p", Style::new().fg(LOGO_CORAL).bold()),
        Span::styled("a", Style::new().fg(LOGO_LIGHT_BLUE).bold()),
        Span::styled("r", Style::new().fg(LOGO_MINT).bold()),
        Span::styled("k", Style::new().fg(LOGO_GOLD).bold()),
    ]);

    frame.render_widget(Paragraph::new(centered), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    if let Some(label) = app.keymap.trigger_label() {
        spans.push(Span::styled(format!("[{}]", label), Style::new().fg(TEXT_WHITE)));
        spans.push(Span::styled(" new idea • ", Style::new().fg(TEXT_DIM)));
    }
    spans.push(Span::styled("[?]", Style::new().fg(TEXT_WHITE)));
    spans.push(Span::styled(" help • ", Style::new().fg(TEXT_DIM)));
    spans.push(Span::styled("[q]", Style::new().fg(TEXT_WHITE)));
    spans.push(Span::styled("uit", Style::new().fg(TEXT_DIM)));

    // Rotating tip, right-aligned when there is room for it
    let hotkeys_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let tip = format!("tip: {}", app.tip());
    let tip_width = tip.chars().count();
    let total = hotkeys_width + 2 + tip_width;
    if (area.width as usize) > total {
        let gap = area.width as usize - hotkeys_width - tip_width;
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(Span::styled(tip, Style::new().fg(TEXT_DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
