//! Taffy Bridge - Integration with Taffy layout engine
//!
//! Two layouts run through Taffy:
//!
//! - the screen: header, control panel, preview pane, code pane and footer
//!   as nested flexbox nodes;
//! - the preview grid: a CSS grid with `columns` equal `fr` tracks, row gap
//!   from main axis spacing, column gap from cross axis spacing, padding
//!   around the whole grid and an aspect ratio on every item.
//!
//! Pixel values from the configuration are mapped to cells at
//! [`PX_PER_COLUMN`] by [`PX_PER_ROW`]. A cell is twice as tall as it is wide,
//! so an item's aspect ratio in cells is twice its pixel ratio.

use taffy::style_helpers::fr;
use taffy::{
    AlignSelf, AvailableSpace, Dimension, Display, FlexDirection, LengthPercentage, NodeId, Rect,
    Size, Style, TaffyError, TaffyTree,
};

use crate::preview::PreviewGrid;
use crate::types::ClipRect;

/// Pixels per terminal column.
pub const PX_PER_COLUMN: f64 = 8.0;
/// Pixels per terminal row.
pub const PX_PER_ROW: f64 = 16.0;

/// Width of the control panel in the side-by-side arrangement.
pub const CONTROLS_WIDTH: u16 = 36;
/// Preferred width of the code pane.
pub const CODE_WIDTH: u16 = 48;

/// Horizontal pixel length in cells.
pub fn px_to_columns(px: f64) -> f32 {
    (px.max(0.0) / PX_PER_COLUMN).round() as f32
}

/// Vertical pixel length in cells.
pub fn px_to_rows(px: f64) -> f32 {
    (px.max(0.0) / PX_PER_ROW).round() as f32
}

// =============================================================================
// SCREEN LAYOUT
// =============================================================================

/// Which panels are shown and how they are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelOptions {
    pub show_controls: bool,
    pub show_preview: bool,
    pub show_code: bool,
    /// Controls span the full width above the outputs.
    pub compact: bool,
    /// Rows the control panel needs (used in compact mode).
    pub controls_height: u16,
}

/// Screen areas in absolute cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub header: ClipRect,
    pub controls: Option<ClipRect>,
    pub preview: Option<ClipRect>,
    pub code: Option<ClipRect>,
    pub footer: ClipRect,
}

fn rect_of(tree: &TaffyTree, node: NodeId, origin: (f32, f32)) -> Result<ClipRect, TaffyError> {
    let layout = tree.layout(node)?;
    Ok(ClipRect::new(
        (origin.0 + layout.location.x).round() as u16,
        (origin.1 + layout.location.y).round() as u16,
        layout.size.width.round() as u16,
        layout.size.height.round() as u16,
    ))
}

fn fixed_height(rows: f32) -> Style {
    Style {
        size: Size {
            width: Dimension::Percent(1.0),
            height: Dimension::Length(rows),
        },
        flex_shrink: 0.0,
        ..Default::default()
    }
}

fn grow(factor: f32) -> Style {
    Style {
        flex_grow: factor,
        flex_shrink: 1.0,
        flex_basis: Dimension::Length(0.0),
        ..Default::default()
    }
}

fn build_screen(width: u16, height: u16, options: &PanelOptions) -> Result<ScreenLayout, TaffyError> {
    let mut tree: TaffyTree = TaffyTree::new();

    let header = tree.new_leaf(fixed_height(1.0))?;
    let footer = tree.new_leaf(fixed_height(1.0))?;

    // Output row: preview grows, code keeps its preferred width.
    let preview = options
        .show_preview
        .then(|| tree.new_leaf(grow(1.0)))
        .transpose()?;
    let code = if options.show_code {
        let style = if options.show_preview {
            Style {
                flex_grow: 0.0,
                flex_shrink: 1.0,
                flex_basis: Dimension::Length(CODE_WIDTH as f32),
                ..Default::default()
            }
        } else {
            grow(1.0)
        };
        Some(tree.new_leaf(style)?)
    } else {
        None
    };
    let outputs: Vec<NodeId> = preview.into_iter().chain(code).collect();
    let output_row = tree.new_with_children(
        Style {
            flex_direction: FlexDirection::Row,
            gap: Size {
                width: LengthPercentage::Length(1.0),
                height: LengthPercentage::Length(0.0),
            },
            ..grow(1.0)
        },
        &outputs,
    )?;

    let controls_style = if options.compact {
        Style {
            size: Size {
                width: Dimension::Percent(1.0),
                height: Dimension::Length(options.controls_height as f32),
            },
            flex_shrink: 0.0,
            ..Default::default()
        }
    } else {
        Style {
            size: Size {
                width: Dimension::Length(CONTROLS_WIDTH as f32),
                height: Dimension::Auto,
            },
            flex_shrink: 0.0,
            ..Default::default()
        }
    };
    let controls = options
        .show_controls
        .then(|| tree.new_leaf(controls_style))
        .transpose()?;

    let body_children: Vec<NodeId> = controls.into_iter().chain([output_row]).collect();
    let body = tree.new_with_children(
        Style {
            flex_direction: if options.compact {
                FlexDirection::Column
            } else {
                FlexDirection::Row
            },
            gap: Size {
                width: LengthPercentage::Length(1.0),
                height: LengthPercentage::Length(0.0),
            },
            ..grow(1.0)
        },
        &body_children,
    )?;

    let root = tree.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            size: Size {
                width: Dimension::Length(width as f32),
                height: Dimension::Length(height as f32),
            },
            ..Default::default()
        },
        &[header, body, footer],
    )?;

    tree.compute_layout(
        root,
        Size {
            width: AvailableSpace::Definite(width as f32),
            height: AvailableSpace::Definite(height as f32),
        },
    )?;

    // Children are positioned relative to their parent.
    let body_rect = tree.layout(body)?;
    let body_origin = (body_rect.location.x, body_rect.location.y);
    let row_rect = tree.layout(output_row)?;
    let row_origin = (
        body_origin.0 + row_rect.location.x,
        body_origin.1 + row_rect.location.y,
    );

    Ok(ScreenLayout {
        header: rect_of(&tree, header, (0.0, 0.0))?,
        controls: controls.map(|n| rect_of(&tree, n, body_origin)).transpose()?,
        preview: preview.map(|n| rect_of(&tree, n, row_origin)).transpose()?,
        code: code.map(|n| rect_of(&tree, n, row_origin)).transpose()?,
        footer: rect_of(&tree, footer, (0.0, 0.0))?,
    })
}

/// Compute the panel areas for a terminal of `width` x `height` cells.
pub fn compute_screen_layout(width: u16, height: u16, options: &PanelOptions) -> ScreenLayout {
    build_screen(width, height, options).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "screen layout failed");
        ScreenLayout::default()
    })
}

// =============================================================================
// GRID LAYOUT
// =============================================================================

/// Preview item rectangles relative to the pane origin.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridLayout {
    /// One rect per item, in item order.
    pub cells: Vec<ClipRect>,
    /// Total height including padding.
    pub content_height: u16,
}

impl GridLayout {
    /// Vertical offset of the first cell in grid row `row`.
    pub fn row_offset(&self, row: usize, columns: usize) -> u16 {
        let first = self.cells.first().map(|c| c.y).unwrap_or(0);
        self.cells
            .get(row.saturating_mul(columns.max(1)))
            .map(|c| c.y.saturating_sub(first))
            .unwrap_or(0)
    }
}

fn build_grid(grid: &PreviewGrid, width: u16) -> Result<GridLayout, TaffyError> {
    let mut tree: TaffyTree = TaffyTree::new();
    let padding = LengthPercentage::Length(px_to_columns(grid.padding).min(width as f32 / 4.0));
    let padding_rows = LengthPercentage::Length(px_to_rows(grid.padding));

    let items = grid
        .items
        .iter()
        .map(|item| {
            let ratio = (item.aspect_ratio * 2.0) as f32;
            tree.new_leaf(Style {
                aspect_ratio: (ratio.is_finite() && ratio > 0.0).then_some(ratio),
                align_self: Some(AlignSelf::Start),
                ..Default::default()
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let columns = grid.columns.max(1) as usize;
    let root = tree.new_with_children(
        Style {
            display: Display::Grid,
            grid_template_columns: vec![fr(1.0); columns],
            gap: Size {
                width: LengthPercentage::Length(px_to_columns(grid.column_gap)),
                height: LengthPercentage::Length(px_to_rows(grid.row_gap)),
            },
            padding: Rect {
                left: padding,
                right: padding,
                top: padding_rows,
                bottom: padding_rows,
            },
            size: Size {
                width: Dimension::Length(width as f32),
                height: Dimension::Auto,
            },
            ..Default::default()
        },
        &items,
    )?;

    tree.compute_layout(
        root,
        Size {
            width: AvailableSpace::Definite(width as f32),
            height: AvailableSpace::MaxContent,
        },
    )?;

    let cells = items
        .iter()
        .map(|n| rect_of(&tree, *n, (0.0, 0.0)))
        .collect::<Result<Vec<_>, _>>()?;
    let content_height = tree.layout(root)?.size.height.round() as u16;

    Ok(GridLayout {
        cells,
        content_height,
    })
}

/// Lay out the preview grid inside a pane `width` cells wide.
pub fn compute_grid_layout(grid: &PreviewGrid, width: u16) -> GridLayout {
    build_grid(grid, width).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "grid layout failed");
        GridLayout::default()
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Configuration;
    use crate::preview;

    fn panels() -> PanelOptions {
        PanelOptions {
            show_controls: true,
            show_preview: true,
            show_code: true,
            compact: false,
            controls_height: 20,
        }
    }

    #[test]
    fn test_px_conversion() {
        assert_eq!(px_to_columns(16.0), 2.0);
        assert_eq!(px_to_rows(16.0), 1.0);
        assert_eq!(px_to_rows(0.0), 0.0);
        assert_eq!(px_to_columns(-5.0), 0.0);
    }

    #[test]
    fn test_screen_side_by_side() {
        let layout = compute_screen_layout(140, 40, &panels());
        assert_eq!(layout.header, ClipRect::new(0, 0, 140, 1));
        assert_eq!(layout.footer.y, 39);

        let controls = layout.controls.unwrap();
        assert_eq!(controls.x, 0);
        assert_eq!(controls.width, CONTROLS_WIDTH);
        assert_eq!(controls.y, 1);

        let preview = layout.preview.unwrap();
        let code = layout.code.unwrap();
        assert!(preview.x > controls.x + controls.width - 1);
        assert!(code.x > preview.x);
        assert_eq!(code.x + code.width, 140);
    }

    #[test]
    fn test_screen_hidden_panels() {
        let options = PanelOptions {
            show_controls: false,
            show_code: false,
            ..panels()
        };
        let layout = compute_screen_layout(100, 30, &options);
        assert!(layout.controls.is_none());
        assert!(layout.code.is_none());
        let preview = layout.preview.unwrap();
        assert_eq!(preview.x, 0);
        assert_eq!(preview.width, 100);
    }

    #[test]
    fn test_screen_compact_stacks_controls() {
        let options = PanelOptions {
            compact: true,
            controls_height: 10,
            ..panels()
        };
        let layout = compute_screen_layout(100, 40, &options);
        let controls = layout.controls.unwrap();
        assert_eq!(controls.width, 100);
        assert_eq!(controls.height, 10);
        assert!(layout.preview.unwrap().y >= controls.y + controls.height);
    }

    #[test]
    fn test_grid_columns_and_rows() {
        let grid = preview::render(&Configuration::default());
        let layout = compute_grid_layout(&grid, 60);
        assert_eq!(layout.cells.len(), 12);

        // Three equal columns left to right.
        let row: Vec<ClipRect> = layout.cells[..3].to_vec();
        assert!(row[0].x < row[1].x && row[1].x < row[2].x);
        assert_eq!(row[0].y, row[1].y);
        assert!(row[0].width.abs_diff(row[1].width) <= 1);

        // Next item wraps to a new row below.
        assert_eq!(layout.cells[3].x, row[0].x);
        assert!(layout.cells[3].y > row[0].y);
        assert!(layout.row_offset(1, 3) > 0);
    }

    #[test]
    fn test_grid_gaps_follow_axes() {
        let config = Configuration {
            main_spacing: 32.0,
            cross_spacing: 0.0,
            padding: 0.0,
            ..Configuration::default()
        };
        let layout = compute_grid_layout(&preview::render(&config), 60);
        let a = layout.cells[0];
        let b = layout.cells[1];
        let below = layout.cells[3];
        // No column gap, two-row gap between rows.
        assert_eq!(a.x + a.width, b.x);
        assert_eq!(below.y, a.y + a.height + 2);
    }
}
