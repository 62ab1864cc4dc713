//! Preview derivation.
//!
//! Turns a [`Configuration`] into a [`PreviewGrid`]: the track count, gaps,
//! padding and the full list of items. The grid is rebuilt from scratch on
//! every call.

use crate::catalog::{self, PreviewItem};
use crate::model::Configuration;

/// Presentation-independent description of the preview grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewGrid {
    /// Number of equal-width column tracks.
    pub columns: u32,
    /// Gap between rows (main axis spacing).
    pub row_gap: f64,
    /// Gap between columns (cross axis spacing).
    pub column_gap: f64,
    /// Padding around the whole grid.
    pub padding: f64,
    pub items: Vec<PreviewItem>,
}

impl PreviewGrid {
    /// Number of rows needed for the items.
    pub fn rows(&self) -> u32 {
        if self.columns == 0 {
            return self.items.len() as u32;
        }
        (self.items.len() as u32).div_ceil(self.columns)
    }
}

/// Render the preview grid for a configuration.
pub fn render(config: &Configuration) -> PreviewGrid {
    let descriptor = catalog::lookup(config.content_template);
    let items = (1..=config.item_count)
        .map(|i| descriptor.render_preview_item(i, config.aspect_ratio))
        .collect();

    tracing::debug!(
        template = descriptor.id,
        items = config.item_count,
        columns = config.columns,
        "preview rendered"
    );

    PreviewGrid {
        columns: config.columns,
        row_gap: config.main_spacing,
        column_gap: config.cross_spacing,
        padding: config.padding,
        items,
    }
}
