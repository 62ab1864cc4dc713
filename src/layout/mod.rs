//! Layout Module
//!
//! Screen and preview-grid layout for the terminal adapter, computed with
//! [Taffy](https://github.com/DioxusLabs/taffy), plus text measurement in
//! terminal cells.
//!
//! # Example
//!
//! ```ignore
//! use gridview_builder::layout::{compute_grid_layout, compute_screen_layout};
//!
//! let screen = compute_screen_layout(120, 40, &panels);
//! if let Some(area) = screen.preview {
//!     let grid = compute_grid_layout(&widget.preview(), area.width);
//! }
//! ```

mod taffy_bridge;
mod text_measure;

pub use taffy_bridge::{
    compute_grid_layout, compute_screen_layout, px_to_columns, px_to_rows, GridLayout,
    PanelOptions, ScreenLayout, CODE_WIDTH, CONTROLS_WIDTH, PX_PER_COLUMN, PX_PER_ROW,
};
pub use text_measure::{char_width, string_width, truncate_text, wrap_text};
