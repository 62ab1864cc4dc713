//! Output buffering and stateful cell rendering.
//!
//! These components keep terminal output small:
//! - Writes are batched into a single flush per frame
//! - Terminal state is tracked to avoid redundant escape codes
//! - Only changes (colors, attributes, cursor position) are emitted
//!
//! Escape sequences come from crossterm commands queued into the buffer.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor};

use crate::types::{Attr, Cell, Rgba};

// =============================================================================
// OutputBuffer
// =============================================================================

/// A buffer that accumulates output for batch writing.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with default capacity.
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(16384),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Clear the buffer without deallocating.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Write a unicode codepoint. Invalid codepoints are dropped.
    #[inline]
    pub fn write_codepoint(&mut self, cp: u32) {
        if let Some(c) = char::from_u32(cp) {
            let mut buf = [0u8; 4];
            self.data.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
    }

    /// Flush buffer to stdout (blocking).
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.flush_to(&mut stdout)?;
        stdout.flush()
    }

    /// Move the accumulated bytes into a writer.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.data)?;
        self.data.clear();
        Ok(())
    }

    /// The accumulated data as a string (lossy).
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // Buffering only; the real flush is flush_stdout.
        Ok(())
    }
}

// =============================================================================
// Color and attribute mapping
// =============================================================================

/// Map a cell color to a crossterm color.
pub fn to_crossterm_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        Color::Reset
    } else if color.is_ansi() {
        Color::AnsiValue(color.ansi_index())
    } else {
        Color::Rgb {
            r: color.r.clamp(0, 255) as u8,
            g: color.g.clamp(0, 255) as u8,
            b: color.b.clamp(0, 255) as u8,
        }
    }
}

fn queue_attrs<W: Write>(out: &mut W, attrs: Attr) -> io::Result<()> {
    const MAPPING: [(Attr, Attribute); 5] = [
        (Attr::BOLD, Attribute::Bold),
        (Attr::DIM, Attribute::Dim),
        (Attr::ITALIC, Attribute::Italic),
        (Attr::UNDERLINE, Attribute::Underlined),
        (Attr::INVERSE, Attribute::Reverse),
    ];
    for (flag, attribute) in MAPPING {
        if attrs.contains(flag) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

// =============================================================================
// StatefulCellRenderer
// =============================================================================

/// Renders cells while tracking terminal state to minimize output.
///
/// Tracks the last cursor position, colors and attributes; a cell only emits
/// escape codes for state that changed.
#[derive(Debug)]
pub struct StatefulCellRenderer {
    last_x: i32,
    last_y: i32,
    last_fg: Option<Rgba>,
    last_bg: Option<Rgba>,
    last_attrs: Attr,
}

impl StatefulCellRenderer {
    pub fn new() -> Self {
        Self {
            last_x: -1,
            last_y: -1,
            last_fg: None,
            last_bg: None,
            last_attrs: Attr::NONE,
        }
    }

    /// Reset all tracked state. Call at the start of each frame.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Render a single cell to the output buffer.
    pub fn render_cell(&mut self, output: &mut OutputBuffer, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        // Continuation cells are covered by the wide character before them.
        if cell.char == 0 {
            self.last_x = x as i32;
            self.last_y = y as i32;
            return Ok(());
        }

        if y as i32 != self.last_y || x as i32 != self.last_x + 1 {
            queue!(output, MoveTo(x, y))?;
        }

        if cell.attrs != self.last_attrs {
            queue!(output, SetAttribute(Attribute::Reset))?;
            queue_attrs(output, cell.attrs)?;
            // A reset clears colors too.
            self.last_fg = None;
            self.last_bg = None;
            self.last_attrs = cell.attrs;
        }

        if self.last_fg != Some(cell.fg) {
            queue!(output, SetForegroundColor(to_crossterm_color(cell.fg)))?;
            self.last_fg = Some(cell.fg);
        }

        if self.last_bg != Some(cell.bg) {
            queue!(output, SetBackgroundColor(to_crossterm_color(cell.bg)))?;
            self.last_bg = Some(cell.bg);
        }

        output.write_codepoint(cell.char);

        self.last_x = x as i32;
        self.last_y = y as i32;
        Ok(())
    }
}

impl Default for StatefulCellRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(ch: char, fg: Rgba, bg: Rgba) -> Cell {
        Cell {
            char: ch as u32,
            fg,
            bg,
            attrs: Attr::NONE,
        }
    }

    #[test]
    fn test_output_buffer_write() {
        let mut buf = OutputBuffer::new();
        write!(buf, "hello").unwrap();
        buf.write_codepoint(' ' as u32);
        buf.write_codepoint('⭐' as u32);
        assert_eq!(buf.as_str().as_ref(), "hello ⭐");
        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_flush_to_drains() {
        let mut buf = OutputBuffer::new();
        write!(buf, "abc").unwrap();
        let mut sink = Vec::new();
        buf.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"abc");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(to_crossterm_color(Rgba::TERMINAL_DEFAULT), Color::Reset);
        assert_eq!(to_crossterm_color(Rgba::ansi(4)), Color::AnsiValue(4));
        assert_eq!(
            to_crossterm_color(Rgba::rgb(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn test_stateful_renderer_skips_sequential() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();
        let a = cell('A', Rgba::WHITE, Rgba::BLACK);

        renderer.render_cell(&mut output, 0, 0, &a).unwrap();
        let first_len = output.len();

        output.clear();
        renderer.render_cell(&mut output, 1, 0, &a).unwrap();
        assert_eq!(output.as_str().as_ref(), "A");
        assert!(output.len() < first_len);
    }

    #[test]
    fn test_stateful_renderer_moves_on_gap() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();
        let a = cell('A', Rgba::WHITE, Rgba::BLACK);

        renderer.render_cell(&mut output, 0, 0, &a).unwrap();
        output.clear();
        renderer.render_cell(&mut output, 5, 2, &a).unwrap();
        // MoveTo is 1-based on the wire.
        assert_eq!(output.as_str().as_ref(), "\x1b[3;6HA");
    }

    #[test]
    fn test_continuation_cell_is_silent() {
        let mut renderer = StatefulCellRenderer::new();
        let mut output = OutputBuffer::new();
        let cont = Cell {
            char: 0,
            ..cell(' ', Rgba::WHITE, Rgba::BLACK)
        };
        renderer.render_cell(&mut output, 3, 0, &cont).unwrap();
        assert!(output.is_empty());
    }
}
