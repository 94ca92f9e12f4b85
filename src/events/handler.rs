//! Central event handler that coordinates keyboard and mouse events.

use crossterm::event::{Event, KeyEventKind};

use crate::app::App;

use super::Action;
use super::keyboard::handle_key_event;
use super::mouse::handle_mouse_event;

/// Central event handler for the application.
pub struct EventHandler;

impl EventHandler {
    /// Handle a crossterm event (keyboard, mouse) and return an action.
    pub fn handle_event(app: &App, event: &Event) -> Action {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, *key),
            Event::Mouse(mouse) => handle_mouse_event(app, *mouse),
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_key_release_is_ignored() {
        let app = App::new(&Config::default());
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;

        assert_eq!(EventHandler::handle_event(&app, &Event::Key(key)), Action::None);
    }

    #[test]
    fn test_key_press_is_dispatched() {
        let app = App::new(&Config::default());
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(
            EventHandler::handle_event(&app, &Event::Key(key)),
            Action::PickPrompt
        );
    }

    #[test]
    fn test_resize_is_ignored() {
        let app = App::new(&Config::default());
        assert_eq!(
            EventHandler::handle_event(&app, &Event::Resize(80, 24)),
            Action::None
        );
    }
}
