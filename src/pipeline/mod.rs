//! Reactive Pipeline
//!
//! Connects the widget to the terminal.
//!
//! ```text
//! config / focus / copy status / scroll / terminal size
//!        │
//!        ▼
//!   frame derived ──▶ mount loop ──▶ DiffRenderer
//! ```
//!
//! - **frame derived** - pure: reads the signals, returns a FrameBuffer
//! - **mount loop** - the only place with side effects (terminal I/O)

pub mod frame;
pub mod mount;

pub use frame::{compose_frame, create_frame_derived, FrameSources, CONTROLS_HEIGHT};
pub use mount::{handle_event, mount, run, tick, unmount, EventOutcome, MountHandle};
