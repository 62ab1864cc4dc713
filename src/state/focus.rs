//! Focus System - keyboard navigation between controls
//!
//! A fixed-size ring of focusable slots. The focused slot lives in a signal
//! so the frame derived re-renders the focus marker when it moves.
//!
//! # Example
//!
//! ```rust
//! use gridview_builder::state::focus::FocusRing;
//!
//! let ring = FocusRing::new(3);
//! ring.focus_next();
//! ring.focus_next();
//! ring.focus_next();
//! assert_eq!(ring.focused(), 0); // wrapped
//! ring.focus_previous();
//! assert_eq!(ring.focused(), 2);
//! ```

use spark_signals::{signal, Signal};

/// Focus state for `len` focusable slots.
#[derive(Clone)]
pub struct FocusRing {
    index: Signal<usize>,
    len: usize,
}

impl FocusRing {
    /// Create a ring with the first slot focused.
    pub fn new(len: usize) -> Self {
        Self {
            index: signal(0),
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Currently focused slot.
    pub fn focused(&self) -> usize {
        self.index.get()
    }

    pub fn is_focused(&self, slot: usize) -> bool {
        self.focused() == slot
    }

    /// Focus a specific slot. Out-of-range slots are ignored.
    pub fn focus(&self, slot: usize) -> bool {
        if slot >= self.len {
            return false;
        }
        if self.focused() != slot {
            tracing::trace!(slot, "focus moved");
            self.index.set(slot);
        }
        true
    }

    /// Move to the next slot (wrapping).
    pub fn focus_next(&self) {
        if self.len == 0 {
            return;
        }
        self.focus((self.focused() + 1) % self.len);
    }

    /// Move to the previous slot (wrapping).
    pub fn focus_previous(&self) {
        if self.len == 0 {
            return;
        }
        self.focus((self.focused() + self.len - 1) % self.len);
    }

    pub fn signal(&self) -> Signal<usize> {
        self.index.clone()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> FocusRing {
        FocusRing::new(9)
    }

    #[test]
    fn test_initial_focus() {
        let ring = setup();
        assert_eq!(ring.focused(), 0);
        assert!(ring.is_focused(0));
        assert_eq!(ring.len(), 9);
    }

    #[test]
    fn test_next_wraps() {
        let ring = setup();
        for _ in 0..8 {
            ring.focus_next();
        }
        assert_eq!(ring.focused(), 8);
        ring.focus_next();
        assert_eq!(ring.focused(), 0);
    }

    #[test]
    fn test_previous_wraps() {
        let ring = setup();
        ring.focus_previous();
        assert_eq!(ring.focused(), 8);
        ring.focus_previous();
        assert_eq!(ring.focused(), 7);
    }

    #[test]
    fn test_focus_out_of_range_ignored() {
        let ring = setup();
        assert!(ring.focus(4));
        assert!(!ring.focus(9));
        assert_eq!(ring.focused(), 4);
    }

    #[test]
    fn test_empty_ring() {
        let ring = FocusRing::new(0);
        assert!(ring.is_empty());
        ring.focus_next();
        ring.focus_previous();
        assert_eq!(ring.focused(), 0);
    }
}
