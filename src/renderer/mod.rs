//! Terminal renderer - the "blind" output layer.
//!
//! The renderer knows only about cells. It doesn't understand controls,
//! templates or configuration. It takes a filled [`FrameBuffer`] and writes
//! the changed cells to the terminal.
//!
//! ```text
//!   frame composer ──▶ FrameBuffer ──▶ DiffRenderer ──▶ terminal
//! ```

mod buffer;
mod diff;
mod output;

pub use buffer::{BorderStyle, FrameBuffer};
pub use diff::DiffRenderer;
pub use output::{to_crossterm_color, OutputBuffer, StatefulCellRenderer};
