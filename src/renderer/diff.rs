//! Differential renderer for fullscreen mode.
//!
//! The DiffRenderer compares the current frame to the previous frame and only
//! outputs cells that have changed.
//!
//! # Algorithm
//!
//! 1. Wrap output in a synchronized update
//! 2. For each cell in the new frame:
//!    - If previous frame exists and cell is unchanged: skip
//!    - Otherwise: render cell with StatefulCellRenderer
//! 3. Flush output buffer (single write)
//! 4. Store current frame as previous for next comparison

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::queue;
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{
    BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen,
};

use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};

/// Differential renderer for fullscreen mode.
pub struct DiffRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Render a frame to stdout, outputting only changed cells.
    ///
    /// Returns true if any cells were changed.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let changed = self.render_into(buffer)?;
        self.output.flush_stdout()?;
        Ok(changed)
    }

    /// Render a frame into a writer instead of stdout.
    pub fn render_to<W: Write>(&mut self, buffer: &FrameBuffer, writer: &mut W) -> io::Result<bool> {
        let changed = self.render_into(buffer)?;
        self.output.flush_to(writer)?;
        Ok(changed)
    }

    fn render_into(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut has_changes = false;

        queue!(self.output, BeginSynchronizedUpdate)?;
        self.cell_renderer.reset();

        let width = buffer.width();
        let previous = self
            .previous
            .as_ref()
            .filter(|prev| prev.width() == width && prev.height() == buffer.height());

        for (i, cell) in buffer.cells().iter().enumerate() {
            // No previous frame, or a size change, redraws everything.
            if previous.is_some_and(|prev| prev.cells()[i] == *cell) {
                continue;
            }
            has_changes = true;
            let x = (i % width as usize) as u16;
            let y = (i / width as usize) as u16;
            self.cell_renderer.render_cell(&mut self.output, x, y, cell)?;
        }

        queue!(self.output, EndSynchronizedUpdate)?;
        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Invalidate the previous frame. Next render will be a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Enter fullscreen mode (alternate screen buffer, hidden cursor).
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        queue!(self.output, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        self.output.flush_stdout()?;
        self.invalidate();
        Ok(())
    }

    /// Exit fullscreen mode.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        queue!(self.output, SetAttribute(Attribute::Reset), Show, LeaveAlternateScreen)?;
        self.output.flush_stdout()
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}
