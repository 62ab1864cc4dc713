//! State Module - Runtime state of one configurator
//!
//! - **Store** - the configuration signal and its setters
//! - **Focus** - which control has keyboard focus
//! - **Keyboard** / **Input** - key event types and crossterm conversion
//! - **Clipboard** - where copied code goes
//! - **Copy feedback** - transient copy button state

pub mod clipboard;
pub mod copy_feedback;
pub mod focus;
pub mod input;
pub mod keyboard;
pub mod store;

pub use clipboard::{default_clipboard, Clipboard, MemoryClipboard, UnavailableClipboard};
pub use copy_feedback::{CopyFeedback, CopyStatus};
pub use focus::FocusRing;
pub use keyboard::{KeyState, KeyboardEvent, Modifiers};
pub use store::StateStore;
