//! Terminal state signals and mode switching.
//!
//! The size signal is the root the render effect tracks besides the filter
//! state and focus: a resize re-runs the effect.

use std::io::{self, stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use spark_signals::{signal, Signal};

// =============================================================================
// Terminal Size Signal
// =============================================================================

thread_local! {
    static TERMINAL_SIZE: Signal<(u16, u16)> = signal((80, 24));
}

/// Current terminal size as (width, height).
pub fn terminal_size() -> (u16, u16) {
    TERMINAL_SIZE.with(|s| s.get())
}

pub fn terminal_width() -> u16 {
    terminal_size().0
}

pub fn terminal_height() -> u16 {
    terminal_size().1
}

/// Set the terminal size (called on resize events).
pub fn set_terminal_size(width: u16, height: u16) {
    TERMINAL_SIZE.with(|s| {
        if s.get() != (width, height) {
            s.set((width, height));
        }
    });
}

/// Get the size signal for reactive tracking.
pub fn terminal_size_signal() -> Signal<(u16, u16)> {
    TERMINAL_SIZE.with(|s| s.clone())
}

/// Detect and set the actual terminal size.
pub fn detect_terminal_size() {
    if let Ok((width, height)) = crossterm::terminal::size() {
        set_terminal_size(width, height);
    }
}

// =============================================================================
// Mode Switching
// =============================================================================

/// Raw mode, alternate screen, hidden cursor.
pub fn enter_fullscreen() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide)
}

/// Undo [`enter_fullscreen`]. Runs every step even if one fails.
pub fn exit_fullscreen() -> io::Result<()> {
    let screen = execute!(stdout(), Show, LeaveAlternateScreen);
    let raw = disable_raw_mode();
    screen.and(raw)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_size() {
        set_terminal_size(120, 40);
        assert_eq!(terminal_width(), 120);
        assert_eq!(terminal_height(), 40);
        assert_eq!(terminal_size_signal().get(), (120, 40));
    }
}
