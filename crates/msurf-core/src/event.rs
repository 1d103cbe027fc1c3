//! Keyboard input delivered to a surface.
//!
//! Hosts translate their native keyboard events into [`KeyEvent`]. For web
//! hosts, [`KeyEvent::from_dom`] accepts the DOM `key` string and the legacy
//! numeric `keyCode`, preferring `key` when it is recognized. Older engines
//! only report `keyCode`, newer ones may omit it.

use bitflags::bitflags;

/// Logical key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Tab,
    /// Shift+Tab as reported by hosts that fold the modifier into the key.
    BackTab,
    Enter,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Char(char),
    /// Any key the surface does not care about.
    Other,
}

impl KeyCode {
    /// Decode a DOM `KeyboardEvent.key` value.
    ///
    /// Returns `None` for names this crate does not model, so callers can
    /// fall back to the numeric key code.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        let code = match key {
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            "Enter" => Self::Enter,
            "ArrowUp" | "Up" => Self::Up,
            "ArrowDown" | "Down" => Self::Down,
            "ArrowLeft" | "Left" => Self::Left,
            "ArrowRight" | "Right" => Self::Right,
            "Home" => Self::Home,
            "End" => Self::End,
            "Spacebar" => Self::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => return None,
                }
            }
        };
        Some(code)
    }

    /// Decode a legacy DOM `KeyboardEvent.keyCode` value.
    #[must_use]
    pub fn from_key_code(key_code: u32) -> Self {
        match key_code {
            9 => Self::Tab,
            13 => Self::Enter,
            27 => Self::Escape,
            32 => Self::Char(' '),
            35 => Self::End,
            36 => Self::Home,
            37 => Self::Left,
            38 => Self::Up,
            39 => Self::Right,
            40 => Self::Down,
            _ => Self::Other,
        }
    }
}

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL = 0b0010;
        const ALT = 0b0100;
        const SUPER = 0b1000;
    }
}

/// Press / repeat / release phase of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Repeat,
    Release,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A key press with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }

    /// Set modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the event kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Build from DOM keyboard event fields (`key`, `keyCode`, `shiftKey`, ...).
    #[must_use]
    pub fn from_dom(key: Option<&str>, key_code: Option<u32>, modifiers: Modifiers) -> Self {
        let code = key
            .and_then(KeyCode::from_dom_key)
            .or_else(|| key_code.map(KeyCode::from_key_code))
            .unwrap_or(KeyCode::Other);
        Self::new(code).with_modifiers(modifiers)
    }

    /// Press or auto-repeat.
    #[inline]
    #[must_use]
    pub fn is_press(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }

    #[inline]
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Tab or Shift+Tab, returning `Some(reverse)`.
    #[must_use]
    pub fn tab_direction(&self) -> Option<bool> {
        match self.code {
            KeyCode::Tab => Some(self.shift()),
            KeyCode::BackTab => Some(true),
            _ => None,
        }
    }
}
