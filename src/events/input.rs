//! Input event types and key mappings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    /// Any key without a binding name.
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Other,
        }
    }
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            shift: mods.contains(KeyModifiers::SHIFT),
        }
    }
}

/// A processed input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self {
            key: Key::from(event.code),
            modifiers: Modifiers::from(event.modifiers),
        }
    }
}

impl InputEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// The character typed, if this is plain text input.
    pub fn text(&self) -> Option<char> {
        match self.key {
            Key::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt => Some(c),
            _ => None,
        }
    }

    /// Check if this matches a key binding string (e.g. "Ctrl+q", "Enter", "+").
    ///
    /// Shift is implied by the character for symbol keys, so `?` matches a
    /// shifted `/` press without spelling out "Shift+?".
    pub fn matches(&self, binding: &str) -> bool {
        let (mods, key) = split_binding(binding);

        let mut expected = Modifiers::default();
        for part in mods.split('+').filter(|p| !p.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" => expected.ctrl = true,
                "alt" => expected.alt = true,
                "shift" => expected.shift = true,
                _ => return false,
            }
        }

        if self.modifiers.ctrl != expected.ctrl || self.modifiers.alt != expected.alt {
            return false;
        }

        let is_char = matches!(self.key, Key::Char(_));
        if !is_char && self.modifiers.shift != expected.shift {
            return false;
        }

        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return match self.key {
                Key::Char(pressed) if expected.shift => pressed == c.to_ascii_uppercase(),
                Key::Char(pressed) => pressed.eq_ignore_ascii_case(&c),
                _ => false,
            };
        }

        match key.to_lowercase().as_str() {
            "enter" => self.key == Key::Enter,
            "esc" | "escape" => self.key == Key::Escape,
            "backspace" => self.key == Key::Backspace,
            "delete" | "del" => self.key == Key::Delete,
            "tab" => self.key == Key::Tab,
            "backtab" => self.key == Key::BackTab,
            "space" => self.key == Key::Char(' '),
            "up" => self.key == Key::Up,
            "down" => self.key == Key::Down,
            "left" => self.key == Key::Left,
            "right" => self.key == Key::Right,
            "home" => self.key == Key::Home,
            "end" => self.key == Key::End,
            "pageup" => self.key == Key::PageUp,
            "pagedown" => self.key == Key::PageDown,
            s if s.starts_with('f') => s[1..]
                .parse::<u8>()
                .is_ok_and(|n| self.key == Key::F(n)),
            _ => false,
        }
    }
}

/// Split "Ctrl+Alt+x" into ("Ctrl+Alt", "x"). A trailing "+" is the key itself.
fn split_binding(binding: &str) -> (&str, &str) {
    if let Some(rest) = binding.strip_suffix('+')
        && (rest.is_empty() || rest.ends_with('+'))
    {
        return (rest, "+");
    }
    binding.rsplit_once('+').unwrap_or(("", binding))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, mods: KeyModifiers) -> InputEvent {
        InputEvent::from(KeyEvent::new(code, mods))
    }

    #[test]
    fn test_plain_char() {
        let q = press(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(q.matches("q"));
        assert!(!q.matches("Ctrl+q"));
        assert!(!q.matches("w"));
    }

    #[test]
    fn test_ctrl_binding() {
        let ctrl_c = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(ctrl_c.matches("Ctrl+c"));
        assert!(!ctrl_c.matches("c"));
    }

    #[test]
    fn test_plus_binding() {
        assert_eq!(split_binding("+"), ("", "+"));
        assert_eq!(split_binding("Ctrl++"), ("Ctrl+", "+"));
        assert_eq!(split_binding("Ctrl+q"), ("Ctrl", "q"));

        let plus = press(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert!(plus.matches("+"));
        assert!(!plus.matches("Ctrl++"));
    }

    #[test]
    fn test_shifted_symbol() {
        let question = press(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert!(question.matches("?"));
        assert!(!question.matches("/"));
    }

    #[test]
    fn test_named_keys() {
        assert!(press(KeyCode::Enter, KeyModifiers::NONE).matches("Enter"));
        assert!(press(KeyCode::Esc, KeyModifiers::NONE).matches("esc"));
        assert!(press(KeyCode::F(5), KeyModifiers::NONE).matches("F5"));
        assert!(!press(KeyCode::Enter, KeyModifiers::SHIFT).matches("Enter"));
    }

    #[test]
    fn test_shift_letter() {
        let upper = press(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert!(upper.matches("Shift+g"));
        assert!(!press(KeyCode::Char('g'), KeyModifiers::NONE).matches("Shift+g"));
    }

    #[test]
    fn test_text_ignores_ctrl() {
        assert_eq!(press(KeyCode::Char('e'), KeyModifiers::NONE).text(), Some('e'));
        assert_eq!(press(KeyCode::Char('E'), KeyModifiers::SHIFT).text(), Some('E'));
        assert_eq!(press(KeyCode::Char('e'), KeyModifiers::CONTROL).text(), None);
        assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE).text(), None);
    }
}
