//! Keyboard Module - key event types
//!
//! Framework-level key events. Keys are named strings (`"a"`, `"Enter"`,
//! `"ArrowUp"`) so control bindings read like the key names users see.
//! Conversion from crossterm lives in the input module.
//!
//! # Example
//!
//! ```rust
//! use gridview_builder::state::keyboard::{KeyboardEvent, Modifiers};
//!
//! let event = KeyboardEvent::with_modifiers("Tab", Modifiers::shift());
//! assert!(event.is("Tab"));
//! assert!(event.modifiers.shift);
//! ```

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    pub fn alt() -> Self {
        Self { alt: true, ..Self::default() }
    }

    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowUp")
    pub key: String,
    pub modifiers: Modifiers,
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Press or auto-repeat. Controls act on both.
    pub fn is_actionable(&self) -> bool {
        self.state != KeyState::Release
    }

    pub fn is(&self, key: &str) -> bool {
        self.key == key
    }

    /// True for Ctrl+C.
    pub fn is_interrupt(&self) -> bool {
        self.modifiers.ctrl && (self.key == "c" || self.key == "C")
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_press() {
        let event = KeyboardEvent::new("a");
        assert_eq!(event.state, KeyState::Press);
        assert!(event.is_actionable());
        assert_eq!(event.modifiers, Modifiers::none());
    }

    #[test]
    fn test_release_not_actionable() {
        let event = KeyboardEvent {
            key: "ArrowLeft".to_string(),
            modifiers: Modifiers::none(),
            state: KeyState::Release,
        };
        assert!(!event.is_actionable());

        let repeat = KeyboardEvent { state: KeyState::Repeat, ..event };
        assert!(repeat.is_actionable());
    }

    #[test]
    fn test_interrupt() {
        assert!(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()).is_interrupt());
        assert!(!KeyboardEvent::new("c").is_interrupt());
        assert!(!KeyboardEvent::with_modifiers("c", Modifiers::alt()).is_interrupt());
    }
}
