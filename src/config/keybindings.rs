//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keybinding system that allows users
//! to customize the keyboard shortcuts of the polyline editor.

use crate::input::Key;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Finish the polyline being drawn, dropping its provisional point
    Commit,
    /// Discard the polyline being drawn
    Cancel,
    /// Remove the last committed point of the polyline being drawn
    DeleteLastPoint,
    ToggleHelp,
    ToggleStatusBar,
    Exit,
}

impl Action {
    /// Every action, in the order they are listed in the help overlay.
    pub const ALL: [Action; 6] = [
        Action::Commit,
        Action::Cancel,
        Action::DeleteLastPoint,
        Action::ToggleHelp,
        Action::ToggleStatusBar,
        Action::Exit,
    ];

    /// Human readable label for help text.
    pub fn label(self) -> &'static str {
        match self {
            Action::Commit => "Finish polyline",
            Action::Cancel => "Cancel polyline",
            Action::DeleteLastPoint => "Delete last point",
            Action::ToggleHelp => "Toggle help",
            Action::ToggleStatusBar => "Toggle status bar",
            Action::Exit => "Quit",
        }
    }
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+W" or "Escape".
    /// Modifiers can appear in any order and spaces around '+' are allowed.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]; the empty parts are the '+' key
        let key = key_parts.join("+");
        let key = if key.chars().all(|c| c == '+') {
            "+".to_string()
        } else {
            key
        };
        // Store aliases ("Enter", "Esc") under the name key events are looked up by
        let key = Key::from_name(&key).binding_name().unwrap_or(key);

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

impl std::fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings:
/// ```toml
/// [keybindings]
/// commit = ["Return"]
/// cancel = ["Escape"]
/// delete_last_point = ["Backspace", "Delete"]
/// exit = ["Ctrl+Q"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_commit")]
    pub commit: Vec<String>,

    #[serde(default = "default_cancel")]
    pub cancel: Vec<String>,

    #[serde(default = "default_delete_last_point")]
    pub delete_last_point: Vec<String>,

    #[serde(default = "default_toggle_help")]
    pub toggle_help: Vec<String>,

    #[serde(default = "default_toggle_status_bar")]
    pub toggle_status_bar: Vec<String>,

    #[serde(default = "default_exit")]
    pub exit: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            commit: default_commit(),
            cancel: default_cancel(),
            delete_last_point: default_delete_last_point(),
            toggle_help: default_toggle_help(),
            toggle_status_bar: default_toggle_status_bar(),
            exit: default_exit(),
        }
    }
}

impl KeybindingsConfig {
    /// Returns the configured binding strings for an action.
    pub fn bindings_for(&self, action: Action) -> &[String] {
        match action {
            Action::Commit => &self.commit,
            Action::Cancel => &self.cancel,
            Action::DeleteLastPoint => &self.delete_last_point,
            Action::ToggleHelp => &self.toggle_help,
            Action::ToggleStatusBar => &self.toggle_status_bar,
            Action::Exit => &self.exit,
        }
    }

    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        for action in Action::ALL {
            for binding_str in self.bindings_for(action) {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }
}

fn default_commit() -> Vec<String> {
    vec!["Return".to_string()]
}

fn default_cancel() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_delete_last_point() -> Vec<String> {
    vec!["Backspace".to_string()]
}

fn default_toggle_help() -> Vec<String> {
    vec!["F10".to_string()]
}

fn default_toggle_status_bar() -> Vec<String> {
    vec!["F12".to_string()]
}

fn default_exit() -> Vec<String> {
    vec!["Ctrl+Q".to_string()]
}
