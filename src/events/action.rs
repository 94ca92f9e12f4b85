//! Action enum for decoupling input handling from state changes.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,

    // === Prompt picking ===
    /// Pick a new random prompt and show it
    PickPrompt,

    // === Help ===
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,

    // === Footer ===
    /// Advance the rotating footer tip
    NextTip,

    // === No-op ===
    /// No action to take
    None,
}
