//! Generic input event types for cross-backend compatibility.

/// Generic key representation for cross-backend compatibility.
///
/// Backend implementations (Wayland keyboard handler, replay scripts) map
/// their native key codes to these generic values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    Escape,
    /// Return/Enter key
    Return,
    Backspace,
    Delete,
    Tab,
    Space,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    F10,
    F11,
    F12,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Name used to look the key up in the keybinding map.
    ///
    /// Modifier and unknown keys have no binding name.
    pub fn binding_name(&self) -> Option<String> {
        let name = match self {
            Key::Char(c) => return Some(c.to_string()),
            Key::Escape => "Escape",
            Key::Return => "Return",
            Key::Backspace => "Backspace",
            Key::Delete => "Delete",
            Key::Tab => "Tab",
            Key::Space => "Space",
            Key::F10 => "F10",
            Key::F11 => "F11",
            Key::F12 => "F12",
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => return None,
        };
        Some(name.to_string())
    }

    /// Parses a key name as written in keybindings ("Return", "Escape", "q", ...).
    ///
    /// Names are matched case-insensitively; single characters map to [`Key::Char`].
    pub fn from_name(name: &str) -> Key {
        match name.to_ascii_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "return" | "enter" => Key::Return,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "tab" => Key::Tab,
            "space" => Key::Space,
            "shift" => Key::Shift,
            "ctrl" | "control" => Key::Ctrl,
            "alt" => Key::Alt,
            "f10" => Key::F10,
            "f11" => Key::F11,
            "f12" => Key::F12,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Unknown,
                }
            }
        }
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button: places points
    Left,
    /// Cancels the polyline being drawn
    Right,
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_parse_case_insensitively() {
        assert_eq!(Key::from_name("RETURN"), Key::Return);
        assert_eq!(Key::from_name("Enter"), Key::Return);
        assert_eq!(Key::from_name("backspace"), Key::Backspace);
        assert_eq!(Key::from_name("q"), Key::Char('q'));
        assert_eq!(Key::from_name("Hyper"), Key::Unknown);
    }

    #[test]
    fn modifiers_have_no_binding_name() {
        assert_eq!(Key::Shift.binding_name(), None);
        assert_eq!(Key::Unknown.binding_name(), None);
        assert_eq!(Key::Return.binding_name().as_deref(), Some("Return"));
        assert_eq!(Key::Char('+').binding_name().as_deref(), Some("+"));
    }
}
