//! Key input consumed by the fields and events they emit.

// =============================================================================
// Key Input
// =============================================================================

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Left,
    Right,
    Home,
    End,
    /// Anything the fields have no use for.
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }

    /// True when the combination can produce text (no modifier or Shift only).
    pub fn is_typing(&self) -> bool {
        !self.ctrl && !self.alt
    }
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

// =============================================================================
// Field Events
// =============================================================================

/// Events a field emits. Drained by the host with `take_events()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Every accepted change, carrying the new value.
    Input(String),
    /// Net value change over one focus session, emitted on blur.
    Change(String),
    Focus,
    Blur,
    /// Enter pressed in a single-line field.
    Submit,
    /// Ripple surface clicked.
    Click,
}

// =============================================================================
// Edit Result
// =============================================================================

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// The edit was refused and the previous text kept.
    Rejected,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

impl TextEditResult {
    /// Whether the key should stop propagating to the host.
    pub fn is_handled(&self) -> bool {
        !matches!(self, TextEditResult::Ignored)
    }
}
