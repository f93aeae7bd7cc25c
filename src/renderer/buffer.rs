//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what should be displayed
//! on the terminal. The screen composer draws into it; the diff renderer and the
//! plain-text snapshot read from it.
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing.
//! - **Clipping**: text stops at the right edge or at an explicit column limit.
//! - **Wide characters**: emoji use a continuation cell (`char == 0`).

use unicode_width::UnicodeWidthChar;

use crate::types::{Cell, Rgba, Style};

// =============================================================================
// FrameBuffer
// =============================================================================

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
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    /// Create a new buffer with a specific background color.
    pub fn with_background(width: u16, height: u16, bg: Rgba) -> Self {
        let cell = Cell {
            bg,
            ..Cell::default()
        };
        Self {
            width,
            height,
            cells: vec![cell; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
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
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Set a single cell. Returns false if out of bounds.
    pub fn set_cell(&mut self, x: u16, y: u16, char: u32, style: Style) -> bool {
        match self.get_mut(x, y) {
            Some(cell) => {
                cell.char = char;
                cell.fg = style.fg;
                cell.attrs = style.attrs;
                if !style.bg.is_terminal_default() {
                    cell.bg = style.bg;
                }
                true
            }
            None => false,
        }
    }

    /// Fill a rectangle with spaces on `bg`, clipped to the buffer.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, bg: Rgba) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for cy in y..y_end {
            for cx in x..x_end {
                let idx = self.index(cx, cy);
                self.cells[idx] = Cell {
                    bg,
                    ..Cell::default()
                };
            }
        }
    }

    /// Draw text starting at (x, y). Returns the number of columns used.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        self.draw_text_clipped(x, y, text, style, self.width)
    }

    /// Draw text, stopping before column `limit`.
    ///
    /// A wide glyph that would straddle the limit is not drawn.
    pub fn draw_text_clipped(&mut self, x: u16, y: u16, text: &str, style: Style, limit: u16) -> u16 {
        if y >= self.height {
            return 0;
        }
        let limit = limit.min(self.width);
        let mut col = x;

        for ch in text.chars() {
            let w = char_width(ch);
            if w == 0 {
                continue;
            }
            if col as usize + w > limit as usize {
                break;
            }

            self.set_cell(col, y, ch as u32, style);
            if w == 2 {
                self.set_cell(col + 1, y, 0, style);
            }
            col += w as u16;
        }

        col - x
    }

    /// Draw a horizontal line.
    pub fn draw_hline(&mut self, x: u16, y: u16, length: u16, ch: char, style: Style) {
        let end = x.saturating_add(length).min(self.width);
        for cx in x..end {
            self.set_cell(cx, y, ch as u32, style);
        }
    }

    /// Plain-text rows with trailing spaces trimmed.
    ///
    /// Continuation cells are skipped, so a wide glyph occupies one char.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                let line: String = (0..self.width)
                    .filter_map(|x| self.get(x, y))
                    .filter(|cell| cell.char != 0)
                    .filter_map(|cell| char::from_u32(cell.char))
                    .collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    /// [`to_lines`](Self::to_lines) joined with newlines.
    pub fn to_text(&self) -> String {
        self.to_lines().join("\n")
    }
}

// =============================================================================
// Text measurement
// =============================================================================

/// Display width of a character (0, 1 or 2 columns).
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Display width of a string.
pub fn string_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Truncate to at most `max` columns, ending with `…` when cut.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if string_width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = char_width(ch);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

// =============================================================================
// Tests
// =============================================================================
