//! Clipboard Module - where copied code goes
//!
//! The widget writes generated code through the [`Clipboard`] trait so the
//! sink can be swapped: the system clipboard in the terminal app, an
//! in-process buffer in tests. Without a reachable system clipboard every
//! copy fails, so the button reports the failure.
//!
//! # Example
//!
//! ```rust
//! use gridview_builder::state::clipboard::{Clipboard, MemoryClipboard};
//!
//! let mut clip = MemoryClipboard::new();
//! let reader = clip.clone();
//! clip.write_text("GridView.count(...)").unwrap();
//! assert_eq!(reader.contents().as_deref(), Some("GridView.count(...)"));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Error, Result};

// =============================================================================
// Trait
// =============================================================================

/// A sink for copied text.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Human-readable backend name for logs.
    fn name(&self) -> &'static str;
}

// =============================================================================
// Internal Buffer
// =============================================================================

/// In-process clipboard buffer.
///
/// Clones share the same buffer, so a test can keep a handle and read what
/// the widget copied.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    buffer: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently copied text.
    pub fn contents(&self) -> Option<String> {
        self.buffer.borrow().clone()
    }

    pub fn has_content(&self) -> bool {
        self.buffer.borrow().is_some()
    }

    pub fn clear(&self) {
        *self.buffer.borrow_mut() = None;
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        *self.buffer.borrow_mut() = Some(text.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

// =============================================================================
// System Clipboard
// =============================================================================

/// OS clipboard via arboard.
#[cfg(feature = "system-clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "system-clipboard")]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "system"
    }
}

/// A clipboard that always fails. Useful to exercise the failure path.
#[derive(Debug, Clone, Default)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(Error::Clipboard("no clipboard available".to_string()))
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

/// System clipboard when reachable, a failing sink otherwise.
pub fn default_clipboard() -> Box<dyn Clipboard> {
    #[cfg(feature = "system-clipboard")]
    let system = SystemClipboard::new().map(|clip| Box::new(clip) as Box<dyn Clipboard>);
    #[cfg(not(feature = "system-clipboard"))]
    let system = Err(Error::Clipboard("built without system-clipboard".to_string()));
    clipboard_or_unavailable(system)
}

fn clipboard_or_unavailable(system: Result<Box<dyn Clipboard>>) -> Box<dyn Clipboard> {
    match system {
        Ok(clip) => clip,
        Err(e) => {
            tracing::warn!(error = %e, "system clipboard unavailable, copies will fail");
            Box::new(UnavailableClipboard)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> MemoryClipboard {
        MemoryClipboard::new()
    }

    #[test]
    fn test_write_then_read() {
        let mut clip = setup();
        assert!(clip.contents().is_none());
        assert!(!clip.has_content());

        clip.write_text("Hello").unwrap();
        assert_eq!(clip.contents(), Some("Hello".to_string()));
        assert!(clip.has_content());
    }

    #[test]
    fn test_write_overwrites() {
        let mut clip = setup();
        clip.write_text("First").unwrap();
        clip.write_text("Second").unwrap();
        assert_eq!(clip.contents(), Some("Second".to_string()));
    }

    #[test]
    fn test_clones_share_buffer() {
        let mut clip = setup();
        let reader = clip.clone();
        clip.write_text("shared").unwrap();
        assert_eq!(reader.contents(), Some("shared".to_string()));

        reader.clear();
        assert!(clip.contents().is_none());
    }

    #[test]
    fn test_multiline_unicode() {
        let mut clip = setup();
        let text = "Text(\n  'Item 1 ⭐',\n)";
        clip.write_text(text).unwrap();
        assert_eq!(clip.contents().as_deref(), Some(text));
    }

    #[test]
    fn test_unavailable_clipboard_errors() {
        let mut clip = UnavailableClipboard;
        let err = clip.write_text("x").unwrap_err();
        assert!(matches!(err, Error::Clipboard(_)));
        assert_eq!(clip.name(), "unavailable");
    }

    #[test]
    fn test_unreachable_system_clipboard_fails_writes() {
        let mut clip = clipboard_or_unavailable(Err(Error::Clipboard("no display".to_string())));
        assert_eq!(clip.name(), "unavailable");
        assert!(matches!(clip.write_text("GridView.count()"), Err(Error::Clipboard(_))));
    }

    #[test]
    fn test_reachable_clipboard_is_kept() {
        let memory = setup();
        let mut clip = clipboard_or_unavailable(Ok(Box::new(memory.clone())));
        clip.write_text("kept").unwrap();
        assert_eq!(memory.contents().as_deref(), Some("kept"));
    }
}
