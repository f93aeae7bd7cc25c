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
//! 3. Flush output buffer (single syscall)
//! 4. Store current frame as previous for next comparison

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate};

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
        let mut stdout = io::stdout().lock();
        let changed = self.render_to(buffer, &mut stdout)?;
        stdout.flush()?;
        Ok(changed)
    }

    /// Render a frame into any writer.
    pub fn render_to<W: Write>(&mut self, buffer: &FrameBuffer, writer: &mut W) -> io::Result<bool> {
        let mut has_changes = false;

        queue!(self.output, BeginSynchronizedUpdate)?;
        self.cell_renderer.reset();

        let width = buffer.width();
        let height = buffer.height();

        // A size change means the old frame is useless
        let previous = self
            .previous
            .as_ref()
            .filter(|prev| prev.width() == width && prev.height() == height);
        if self.previous.is_some() && previous.is_none() {
            queue!(self.output, Clear(ClearType::All))?;
        }

        for y in 0..height {
            for x in 0..width {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };
                let changed = previous.and_then(|prev| prev.get(x, y)) != Some(cell);

                if changed {
                    has_changes = true;
                    self.cell_renderer.render_cell(&mut self.output, x, y, cell)?;
                }
            }
        }

        queue!(self.output, SetAttribute(Attribute::Reset), EndSynchronizedUpdate)?;
        self.output.flush_to(writer)?;

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Force a full redraw on the next render.
    ///
    /// Use this after terminal resize or when the screen is corrupted.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Clear the screen and home the cursor, then invalidate.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        self.output.flush_stdout()?;
        self.invalidate();
        Ok(())
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
