//! Focus sessions and the committed-change contract.

/// Focus state of a single field.
///
/// Gaining focus snapshots the value; losing focus compares against the
/// snapshot, so a committed change fires at most once per session and only
/// if the value actually moved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FocusLifecycle {
    #[default]
    Unfocused,
    Focused {
        initial_value: String,
    },
}

impl FocusLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        matches!(self, FocusLifecycle::Focused { .. })
    }

    /// Value snapshotted when the current session started.
    pub fn initial_value(&self) -> Option<&str> {
        match self {
            FocusLifecycle::Focused { initial_value } => Some(initial_value),
            FocusLifecycle::Unfocused => None,
        }
    }

    /// Enter the focused state.
    /// Returns true if focus changed.
    pub fn focus(&mut self, current: &str) -> bool {
        if self.is_focused() {
            return false;
        }
        *self = FocusLifecycle::Focused {
            initial_value: current.to_string(),
        };
        true
    }

    /// Leave the focused state.
    /// Returns the committed value when it differs from the session start.
    pub fn blur(&mut self, current: &str) -> Option<String> {
        match std::mem::take(self) {
            FocusLifecycle::Focused { initial_value } if initial_value != current => {
                Some(current.to_string())
            }
            _ => None,
        }
    }
}
