//! Central application state, mutated only by applying [`Action`]s.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;

use crate::config::Config;
use crate::events::Action;
use crate::log;
use crate::prompts::{PromptPicker, BUILTIN_TIPS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal, // Navigation mode
    Help,   // Help popup showing all hotkeys
}

/// Observable state of the idea panel.
///
/// Transitions happen only when a prompt is picked; there is no way back to
/// `Empty` once something has been shown.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    /// Nothing picked yet
    Empty,
    /// The most recently picked prompt
    Showing(String),
}

/// Rectangular screen region for mouse hit testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Clickable areas, rebuilt each frame during render.
///
/// The default (zero-sized) region contains no point, so a button that is
/// never rendered is also never clickable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickAreas {
    pub trigger_button: ClickRegion,
}

/// Key bindings resolved once at startup.
#[derive(Debug, Clone, Copy)]
pub struct KeyMap {
    /// Key that picks a new prompt, `None` when the binding was skipped
    pub trigger: Option<KeyCode>,
}

impl KeyMap {
    /// Human-readable label for the trigger key, for the button and help.
    pub fn trigger_label(&self) -> Option<String> {
        match self.trigger? {
            KeyCode::Enter => Some("Enter".to_string()),
            KeyCode::Tab => Some("Tab".to_string()),
            KeyCode::Char(' ') => Some("Space".to_string()),
            KeyCode::Char(c) => Some(c.to_string()),
            other => Some(format!("{:?}", other)),
        }
    }
}

pub struct App {
    pub input_mode: InputMode,
    pub display: DisplayState,
    pub keymap: KeyMap,
    pub click_areas: ClickAreas,
    pub should_quit: bool,
    picker: PromptPicker,
    tip_index: usize,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let trigger = config.trigger_key();
        if trigger.is_none() {
            log::log("Trigger unbound: prompt picking disabled for this run");
        }

        let picker = PromptPicker::new(config.prompt_list());
        log::log(&format!(
            "Prompt list loaded: {} entries",
            picker.list().len()
        ));

        Self {
            input_mode: InputMode::Normal,
            display: DisplayState::Empty,
            keymap: KeyMap { trigger },
            click_areas: ClickAreas::default(),
            should_quit: false,
            picker,
            tip_index: 0,
        }
    }

    /// Whether a trigger is bound. Unbound means no button, no picking.
    pub fn trigger_bound(&self) -> bool {
        self.keymap.trigger.is_some()
    }

    /// The current footer tip.
    pub fn tip(&self) -> &'static str {
        BUILTIN_TIPS[self.tip_index % BUILTIN_TIPS.len()]
    }

    /// Apply an action to the state. Called once per input event.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::PickPrompt => self.pick_prompt(),
            Action::OpenHelp => self.input_mode = InputMode::Help,
            Action::CloseHelp => self.input_mode = InputMode::Normal,
            Action::NextTip => self.tip_index = (self.tip_index + 1) % BUILTIN_TIPS.len(),
            Action::None => {}
        }
    }

    fn pick_prompt(&mut self) {
        let text = self.picker.pick().to_string();
        self.display = DisplayState::Showing(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventHandler;
    use crate::prompts::{IndexSource, PromptList};
    use crossterm::event::{Event, KeyEvent, KeyModifiers};

    struct FixedSource(usize);

    impl IndexSource for FixedSource {
        fn pick_index(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    fn test_app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn test_initial_state() {
        let app = test_app();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.display, DisplayState::Empty);
        assert!(!app.should_quit);
        assert!(app.trigger_bound());
    }

    #[test]
    fn test_pick_shows_list_member() {
        let mut app = test_app();
        app.apply(Action::PickPrompt);

        let DisplayState::Showing(shown) = &app.display else {
            panic!("prompt should be showing");
        };
        assert!(app.picker.list().entries().iter().any(|entry| entry == shown));
    }

    #[test]
    fn test_pick_replaces_previous_prompt() {
        let list =
            PromptList::from_entries(vec!["A".to_string(), "B".to_string()]).unwrap();
        let mut app = test_app();
        app.picker = PromptPicker::with_source(list, FixedSource(0));

        app.apply(Action::PickPrompt);
        assert_eq!(app.display, DisplayState::Showing("A".to_string()));

        // Same index again: repeats are legal, prior text fully replaced.
        app.apply(Action::PickPrompt);
        assert_eq!(app.display, DisplayState::Showing("A".to_string()));
    }

    #[test]
    fn test_unbound_trigger_is_a_no_op() {
        let config = Config {
            trigger_key: Some("none".to_string()),
            ..Config::default()
        };
        let mut app = App::new(&config);
        assert!(!app.trigger_bound());

        let event = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let action = EventHandler::handle_event(&app, &event);
        app.apply(action);

        assert_eq!(app.display, DisplayState::Empty);
    }

    #[test]
    fn test_help_mode_transitions() {
        let mut app = test_app();
        app.apply(Action::OpenHelp);
        assert_eq!(app.input_mode, InputMode::Help);
        app.apply(Action::CloseHelp);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = test_app();
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_tip_rotation_wraps() {
        let mut app = test_app();
        let first = app.tip();
        for _ in 0..crate::prompts::BUILTIN_TIPS.len() {
            app.apply(Action::NextTip);
        }
        assert_eq!(app.tip(), first);
    }

    #[test]
    fn test_click_region_contains() {
        let region = ClickRegion::new(10, 5, 20, 1);
        assert!(region.contains(10, 5));
        assert!(region.contains(29, 5));
        assert!(!region.contains(30, 5));
        assert!(!region.contains(10, 6));
        assert!(!ClickRegion::default().contains(0, 0));
    }
}
