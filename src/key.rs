//! Logical keystrokes, independent of the terminal backend.

use bitflags::bitflags;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Anything carrying a literal character, space included.
    Char,
    Backspace,
    Tab,
    Enter,
    Escape,
    Up,
    Down,
    Other,
}

bitflags! {
    /// Modifier keys held with a keystroke.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const NONE = 0;
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2;
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(m: KeyModifiers) -> Self {
        let mut out = Modifiers::empty();
        out.set(Modifiers::SHIFT, m.contains(KeyModifiers::SHIFT));
        out.set(Modifiers::CONTROL, m.contains(KeyModifiers::CONTROL));
        out.set(Modifiers::ALT, m.contains(KeyModifiers::ALT));
        out
    }
}

/// One physical keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
    pub ch: Option<char>,
}

impl KeyInput {
    pub fn new(key: Key) -> Self {
        KeyInput {
            key,
            modifiers: Modifiers::NONE,
            ch: None,
        }
    }

    pub fn char(ch: char) -> Self {
        KeyInput {
            key: Key::Char,
            modifiers: Modifiers::NONE,
            ch: Some(ch),
        }
    }

    pub fn with(mut self, modifiers: Modifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    /// Printable ASCII payload (0x20..=0x7E), space included.
    pub fn printable(&self) -> Option<char> {
        self.ch.filter(|c| (' '..='~').contains(c))
    }

    pub fn from_crossterm(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let modifiers = Modifiers::from(modifiers);
        let base = match code {
            KeyCode::Char(c) => KeyInput::char(c),
            KeyCode::Backspace => KeyInput::new(Key::Backspace),
            KeyCode::Tab => KeyInput::new(Key::Tab),
            KeyCode::BackTab => KeyInput::new(Key::Tab).with(Modifiers::SHIFT),
            KeyCode::Enter => KeyInput::new(Key::Enter),
            KeyCode::Esc => KeyInput::new(Key::Escape),
            KeyCode::Up => KeyInput::new(Key::Up),
            KeyCode::Down => KeyInput::new(Key::Down),
            _ => KeyInput::new(Key::Other),
        };
        base.with(modifiers)
    }
}

impl From<KeyEvent> for KeyInput {
    fn from(ev: KeyEvent) -> Self {
        KeyInput::from_crossterm(ev.code, ev.modifiers)
    }
}
