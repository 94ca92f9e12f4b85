//! Mouse event handling.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
///
/// Only left clicks on the trigger button mean anything; the button region
/// is rebuilt each frame during render and stays empty when no trigger is
/// bound, so clicks then fall through.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.click_areas.trigger_button.contains(mouse.column, mouse.row) {
                Action::PickPrompt
            } else {
                Action::None
            }
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ClickRegion;
    use crate::config::Config;
    use crossterm::event::KeyModifiers;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_click_on_button_picks_prompt() {
        let mut app = App::new(&Config::default());
        app.click_areas.trigger_button = ClickRegion::new(10, 5, 16, 1);

        assert_eq!(handle_mouse_event(&app, click(12, 5)), Action::PickPrompt);
        assert_eq!(handle_mouse_event(&app, click(9, 5)), Action::None);
        assert_eq!(handle_mouse_event(&app, click(12, 6)), Action::None);
    }

    #[test]
    fn test_click_without_button_region_is_ignored() {
        // No render has run: the region is empty and nothing is clickable.
        let app = App::new(&Config::default());
        assert_eq!(handle_mouse_event(&app, click(0, 0)), Action::None);
    }

    #[test]
    fn test_non_click_events_are_ignored() {
        let mut app = App::new(&Config::default());
        app.click_areas.trigger_button = ClickRegion::new(0, 0, 80, 24);

        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 5,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handle_mouse_event(&app, scroll), Action::None);
    }
}
