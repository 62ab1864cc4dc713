//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what should be displayed
//! on the terminal. All drawing operations work on this buffer.
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing.
//! - **Clipping**: drawing functions accept an optional `ClipRect`.
//! - **Wide characters**: emoji and CJK characters use continuation markers.
//! - **Backgrounds**: a `None` background keeps whatever the cell already has,
//!   so text can be laid over a filled tile.

use crate::layout::{char_width, string_width};
use crate::types::{Attr, Cell, ClipRect, Rgba};

/// Box-drawing characters: horizontal, vertical, then corners clockwise from top-left.
const BORDER_SINGLE: [char; 6] = ['─', '│', '┌', '┐', '┘', '└'];
const BORDER_ROUNDED: [char; 6] = ['─', '│', '╭', '╮', '╯', '╰'];

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    Single,
    Rounded,
}

impl BorderStyle {
    fn chars(self) -> [char; 6] {
        match self {
            Self::Single => BORDER_SINGLE,
            Self::Rounded => BORDER_ROUNDED,
        }
    }
}

/// A 2D buffer of terminal cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Create a new buffer with a specific background color.
    pub fn with_background(width: u16, height: u16, bg: Rgba) -> Self {
        let mut buffer = Self::new(width, height);
        buffer.clear_with_bg(bg);
        buffer
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer bounds as a ClipRect.
    #[inline]
    pub fn bounds(&self) -> ClipRect {
        ClipRect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.in_bounds(x, y).then(|| &self.cells[self.index(x, y)])
    }

    /// Get a mutable cell reference (returns None if out of bounds).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Raw cells slice, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear with a specific background color.
    pub fn clear_with_bg(&mut self, bg: Rgba) {
        for cell in &mut self.cells {
            *cell = Cell {
                bg,
                ..Cell::default()
            };
        }
    }

    /// One row of the buffer as plain text. Continuation cells are skipped.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.index(0, y);
        self.cells[start..start + self.width as usize]
            .iter()
            .filter(|cell| cell.char != 0)
            .filter_map(|cell| char::from_u32(cell.char))
            .collect()
    }

    /// The whole buffer as plain text, one line per row.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Set a single cell with optional clipping.
    ///
    /// Returns true if the cell was set.
    #[allow(clippy::too_many_arguments)]
    pub fn set_cell(
        &mut self,
        x: u16,
        y: u16,
        char: u32,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        if clip.is_some_and(|clip| !clip.contains(x, y)) {
            return false;
        }

        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];
        cell.char = char;
        cell.fg = fg;
        if let Some(bg) = bg {
            cell.bg = bg;
        }
        cell.attrs = attrs;
        true
    }

    /// Fill a rectangle with a background color, blanking its characters.
    pub fn fill_rect(&mut self, rect: ClipRect, bg: Rgba, clip: Option<&ClipRect>) {
        let area = match clip {
            Some(clip) => rect.intersect(clip),
            None => Some(rect),
        };
        let Some(area) = area.and_then(|a| a.intersect(&self.bounds())) else {
            return;
        };

        for row in area.y..area.y + area.height {
            let start = self.index(area.x, row);
            let end = start + area.width as usize;
            for cell in &mut self.cells[start..end] {
                *cell = Cell {
                    bg,
                    ..Cell::default()
                };
            }
        }
    }

    /// Set only the background of every cell in a rectangle.
    pub fn tint_rect(&mut self, rect: ClipRect, bg: Rgba, clip: Option<&ClipRect>) {
        let area = match clip {
            Some(clip) => rect.intersect(clip),
            None => Some(rect),
        };
        let Some(area) = area.and_then(|a| a.intersect(&self.bounds())) else {
            return;
        };

        for row in area.y..area.y + area.height {
            let start = self.index(area.x, row);
            for cell in &mut self.cells[start..start + area.width as usize] {
                cell.bg = bg;
            }
        }
    }

    /// Draw text at a position.
    ///
    /// Returns the number of cells used (handles wide characters).
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> u16 {
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width {
                break;
            }

            let width = char_width(ch);
            if width == 0 {
                continue;
            }

            // A wide character that would straddle the clip edge is dropped.
            if width == 2 && clip.is_some_and(|c| !c.contains(col + 1, y)) {
                break;
            }

            if self.set_cell(col, y, ch as u32, fg, bg, attrs, clip) && width == 2 {
                if let Some(next) = self.get_mut(col + 1, y) {
                    next.char = 0;
                    next.fg = fg;
                    if let Some(bg) = bg {
                        next.bg = bg;
                    }
                    next.attrs = attrs;
                }
            }

            col = col.saturating_add(width);
        }

        col.saturating_sub(x)
    }

    /// Draw text centered within a width.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text_centered(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> u16 {
        let offset = width.saturating_sub(string_width(text)) / 2;
        self.draw_text(x + offset, y, text, fg, bg, attrs, clip)
    }

    /// Draw text right-aligned within a width.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text_right(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> u16 {
        let offset = width.saturating_sub(string_width(text));
        self.draw_text(x + offset, y, text, fg, bg, attrs, clip)
    }

    /// Draw a border around a rectangle.
    pub fn draw_border(&mut self, rect: ClipRect, style: BorderStyle, color: Rgba, bg: Option<Rgba>) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }

        let [horiz, vert, tl, tr, br, bl] = style.chars();
        let x2 = rect.x + rect.width - 1;
        let y2 = rect.y + rect.height - 1;

        for (x, y, ch) in [(rect.x, rect.y, tl), (x2, rect.y, tr), (x2, y2, br), (rect.x, y2, bl)] {
            self.set_cell(x, y, ch as u32, color, bg, Attr::NONE, None);
        }
        for col in (rect.x + 1)..x2 {
            self.set_cell(col, rect.y, horiz as u32, color, bg, Attr::NONE, None);
            self.set_cell(col, y2, horiz as u32, color, bg, Attr::NONE, None);
        }
        for row in (rect.y + 1)..y2 {
            self.set_cell(rect.x, row, vert as u32, color, bg, Attr::NONE, None);
            self.set_cell(x2, row, vert as u32, color, bg, Attr::NONE, None);
        }
    }

    /// Draw a horizontal run of one character.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_hline(
        &mut self,
        x: u16,
        y: u16,
        length: u16,
        char: char,
        fg: Rgba,
        bg: Option<Rgba>,
        clip: Option<&ClipRect>,
    ) {
        for col in x..x.saturating_add(length).min(self.width) {
            self.set_cell(col, y, char as u32, fg, bg, Attr::NONE, clip);
        }
    }
}
