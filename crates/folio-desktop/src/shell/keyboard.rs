//! Desktop keyboard shortcuts

/// Modifier keys held during a key press
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on Linux/Windows, Cmd on macOS
    #[inline]
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Action bound to a shortcut
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    CloseMenus,
    OpenSelected,
}

impl KeyCommand {
    /// Map a `KeyboardEvent.key` value and modifiers to a shortcut
    pub fn from_key(key: &str, modifiers: Modifiers) -> Option<Self> {
        if !modifiers.command() {
            return None;
        }
        match key {
            "Escape" => Some(KeyCommand::CloseMenus),
            "Enter" => Some(KeyCommand::OpenSelected),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTRL: Modifiers = Modifiers { ctrl: true, meta: false };
    const META: Modifiers = Modifiers { ctrl: false, meta: true };

    #[test]
    fn test_shortcuts_need_command_modifier() {
        assert_eq!(KeyCommand::from_key("Escape", Modifiers::default()), None);
        assert_eq!(KeyCommand::from_key("Escape", CTRL), Some(KeyCommand::CloseMenus));
        assert_eq!(KeyCommand::from_key("Enter", META), Some(KeyCommand::OpenSelected));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(KeyCommand::from_key("a", CTRL), None);
    }
}
