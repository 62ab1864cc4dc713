//! Copy feedback - transient state of the copy button.
//!
//! After a copy attempt the button shows the outcome for [`FEEDBACK_WINDOW`]
//! and then reverts. A new attempt restarts the window. The deadline is
//! checked by [`CopyFeedback::tick`], which the event loop calls every frame.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use spark_signals::{signal, Signal};

use crate::theme::ColorSlot;

/// How long the outcome stays on the button.
pub const FEEDBACK_WINDOW: Duration = Duration::from_secs(2);

pub const LABEL_IDLE: &str = "📋 Copy Flutter Code";
pub const LABEL_COPIED: &str = "✓ Code Copied to Clipboard!";
pub const LABEL_FAILED: &str = "✗ Copy failed";

/// Outcome shown by the copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => LABEL_IDLE,
            Self::Copied => LABEL_COPIED,
            Self::Failed => LABEL_FAILED,
        }
    }

    /// Button color.
    pub fn color(self) -> ColorSlot {
        match self {
            Self::Idle => ColorSlot::Primary,
            Self::Copied => ColorSlot::Success,
            Self::Failed => ColorSlot::Error,
        }
    }
}

/// Copy button state with its reset deadline.
#[derive(Clone)]
pub struct CopyFeedback {
    status: Signal<CopyStatus>,
    deadline: Rc<Cell<Option<Instant>>>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self {
            status: signal(CopyStatus::Idle),
            deadline: Rc::new(Cell::new(None)),
        }
    }

    pub fn status(&self) -> CopyStatus {
        self.status.get()
    }

    /// Record the outcome of a copy attempt made at `now`.
    pub fn record(&self, success: bool, now: Instant) {
        let status = if success {
            CopyStatus::Copied
        } else {
            CopyStatus::Failed
        };
        self.deadline.set(Some(now + FEEDBACK_WINDOW));
        self.status.set(status);
    }

    /// Revert to idle once the window has passed. Returns true on revert.
    pub fn tick(&self, now: Instant) -> bool {
        match self.deadline.get() {
            Some(deadline) if now >= deadline => {
                self.deadline.set(None);
                self.status.set(CopyStatus::Idle);
                true
            }
            _ => false,
        }
    }

    /// Time left before the button reverts.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .get()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Signal handle for deriveds.
    pub fn signal(&self) -> Signal<CopyStatus> {
        self.status.clone()
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (CopyFeedback, Instant) {
        (CopyFeedback::new(), Instant::now())
    }

    #[test]
    fn test_initial_idle() {
        let (feedback, now) = setup();
        assert_eq!(feedback.status(), CopyStatus::Idle);
        assert_eq!(feedback.status().label(), "📋 Copy Flutter Code");
        assert!(!feedback.tick(now));
        assert!(feedback.remaining(now).is_none());
    }

    #[test]
    fn test_success_reverts_after_window() {
        let (feedback, now) = setup();
        feedback.record(true, now);
        assert_eq!(feedback.status(), CopyStatus::Copied);
        assert_eq!(feedback.status().color(), ColorSlot::Success);

        assert!(!feedback.tick(now + Duration::from_millis(1999)));
        assert_eq!(feedback.status(), CopyStatus::Copied);

        assert!(feedback.tick(now + FEEDBACK_WINDOW));
        assert_eq!(feedback.status(), CopyStatus::Idle);
    }

    #[test]
    fn test_failure_label() {
        let (feedback, now) = setup();
        feedback.record(false, now);
        assert_eq!(feedback.status().label(), "✗ Copy failed");
        assert_eq!(feedback.status().color(), ColorSlot::Error);
    }

    #[test]
    fn test_retrigger_restarts_window() {
        let (feedback, now) = setup();
        feedback.record(true, now);
        let later = now + Duration::from_millis(1500);
        feedback.record(true, later);

        // The first window would have ended here.
        assert!(!feedback.tick(now + Duration::from_millis(2500)));
        assert_eq!(feedback.status(), CopyStatus::Copied);
        assert_eq!(feedback.remaining(later), Some(FEEDBACK_WINDOW));

        assert!(feedback.tick(later + FEEDBACK_WINDOW));
        assert_eq!(feedback.status(), CopyStatus::Idle);
    }
}
