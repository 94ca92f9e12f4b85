//! Configuration file support for spark.
//!
//! Configuration is loaded from `~/.config/spark/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/spark/config.toml
//! # Replaces the built-in prompt list when non-empty
//! prompts = [
//!     "Write the test you wish existed before touching the code.",
//!     "Explain the bug out loud to someone who has never seen the codebase.",
//! ]
//!
//! # Key that picks a new prompt: "enter", "space", "tab", a single
//! # character, or "none" to disable picking entirely
//! trigger_key = "enter"
//!
//! theme = "dark"
//! ```

use std::path::{Path, PathBuf};

use crossterm::event::KeyCode;
use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::log;
use crate::prompts::PromptList;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Custom prompt list, replaces the built-in entries when valid
    pub prompts: Option<Vec<String>>,

    /// Trigger key binding, `"none"` leaves the trigger unbound
    pub trigger_key: Option<String>,

    /// Theme name to use (reserved for future use)
    pub theme: Option<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], failures here are hard errors: a path passed
    /// on the command line is expected to exist and parse.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the default configuration file path.
    ///
    /// `SPARK_CONFIG` overrides the standard location.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("SPARK_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spark")
            .join("config.toml")
    }

    /// The active prompt list.
    ///
    /// A configured list that validates to empty falls back to the built-in
    /// entries rather than leaving the picker with nothing to draw from.
    pub fn prompt_list(&self) -> PromptList {
        match &self.prompts {
            Some(entries) => match PromptList::from_entries(entries.clone()) {
                Some(list) => list,
                None => {
                    log::log("Warning: configured prompt list is empty, using built-in prompts");
                    PromptList::builtin()
                }
            },
            None => PromptList::builtin(),
        }
    }

    /// The resolved trigger key, `None` when the binding should be skipped.
    ///
    /// An unparseable value is treated the same as `"none"`: the binding is
    /// silently dropped rather than aborting startup.
    pub fn trigger_key(&self) -> Option<KeyCode> {
        match self.trigger_key.as_deref() {
            None => Some(KeyCode::Enter),
            Some("none") => None,
            Some(value) => {
                let parsed = parse_key(value);
                if parsed.is_none() {
                    log::log(&format!(
                        "Warning: unrecognized trigger_key '{}', trigger left unbound",
                        value
                    ));
                }
                parsed
            }
        }
    }
}

/// Parse a key name from the config file into a key code.
fn parse_key(value: &str) -> Option<KeyCode> {
    match value.to_ascii_lowercase().as_str() {
        "enter" | "return" => Some(KeyCode::Enter),
        "space" => Some(KeyCode::Char(' ')),
        "tab" => Some(KeyCode::Tab),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            }
        }
    }
}
