//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `idea_panel` - The panel showing the currently picked prompt
//! - `trigger_button` - The clickable "new idea" button
//! - `help_popup` - Help overlay with keybindings

mod help_popup;
mod idea_panel;
mod trigger_button;

pub use help_popup::render_help_popup;
pub use idea_panel::render_idea_panel;
pub use trigger_button::render_trigger_button;

/// Wrap text to fit within width, preserving words where possible.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut result = vec![];

    for line in text.split('\n') {
        if line.is_empty() {
            result.push(String::new());
            continue;
        }

        let mut current_line = String::new();

        for word in line.split(' ') {
            let word_len = word.chars().count();

            if current_line.is_empty() {
                if word_len > width {
                    // Word longer than the line, hard-split it
                    let mut remaining = word;
                    while remaining.chars().count() > width {
                        let split = remaining
                            .char_indices()
                            .nth(width)
                            .map(|(i, _)| i)
                            .unwrap_or(remaining.len());
                        result.push(remaining[..split].to_string());
                        remaining = &remaining[split..];
                    }
                    current_line = remaining.to_string();
                } else {
                    current_line = word.to_string();
                }
            } else if current_line.chars().count() + 1 + word_len <= width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                result.push(current_line);
                current_line = word.to_string();
            }
        }

        if !current_line.is_empty() {
            result.push(current_line);
        }
    }

    if result.is_empty() {
        result.push(String::new());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text_is_untouched() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap_text("ask for a refactor of this endpoint", 12),
            vec!["ask for a", "refactor of", "this", "endpoint"]
        );
    }

    #[test]
    fn test_wrap_splits_overlong_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_zero_width_passes_through() {
        assert_eq!(wrap_text("anything", 0), vec!["anything"]);
    }
}
