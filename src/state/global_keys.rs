//! Global Keys Module - Global keyboard shortcuts and routing
//!
//! Provides global key handlers for:
//! - Ctrl+C: Graceful shutdown
//! - Tab: Focus next control
//! - Shift+Tab (BackTab): Focus previous control
//!
//! And the central router that applies the priority chain:
//! focused control → key-specific handlers → global handlers.
//!
//! # Example
//!
//! ```ignore
//! use product_catalog::state::global_keys;
//! use std::sync::Arc;
//! use std::sync::atomic::AtomicBool;
//!
//! let running = Arc::new(AtomicBool::new(true));
//! let handle = global_keys::setup_global_keys(running.clone());
//!
//! // Later, on cleanup:
//! handle.cleanup();
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use super::focus;
use super::keyboard::{self, KeyboardEvent};

// =============================================================================
// ROUTING
// =============================================================================

/// Route a keyboard event through the priority chain.
/// Returns true if any handler consumed it.
pub fn route_keyboard_event(event: KeyboardEvent) -> bool {
    if !event.is_press() {
        return false;
    }

    if keyboard::dispatch_focused(focus::focused(), &event) {
        return true;
    }

    keyboard::dispatch_to_handlers(&event)
}

// =============================================================================
// GLOBAL KEYS HANDLE
// =============================================================================

/// Cleanup handle for global key handlers
pub struct GlobalKeysHandle {
    cleanups: Vec<Box<dyn FnOnce()>>,
}

impl GlobalKeysHandle {
    /// Clean up all global key handlers
    pub fn cleanup(self) {
        for cleanup in self.cleanups {
            cleanup();
        }
    }
}

// =============================================================================
// SETUP FUNCTIONS
// =============================================================================

/// Set up global key handlers.
/// Returns a handle for cleanup.
///
/// - **Ctrl+C**: Sets `running` to false for graceful shutdown
/// - **Tab**: `focus::focus_next()`
/// - **Shift+Tab**: `focus::focus_previous()` (terminals report it as `BackTab`)
pub fn setup_global_keys(running: Arc<AtomicBool>) -> GlobalKeysHandle {
    let ctrl_c_cleanup = keyboard::on(move |event| {
        if event.modifiers.ctrl && event.key == "c" {
            debug!("ctrl+c, stopping");
            running.store(false, Ordering::SeqCst);
            true
        } else {
            false
        }
    });

    // Must register before Tab handler so it can check shift modifier first
    let shift_tab_cleanup = keyboard::on(move |event| {
        if event.key == "BackTab" || (event.key == "Tab" && event.modifiers.shift) {
            focus::focus_previous();
            true
        } else {
            false
        }
    });

    let tab_cleanup = keyboard::on(move |event| {
        if event.key == "Tab" && !event.modifiers.shift {
            focus::focus_next();
            true
        } else {
            false
        }
    });

    GlobalKeysHandle {
        cleanups: vec![
            Box::new(ctrl_c_cleanup),
            Box::new(shift_tab_cleanup),
            Box::new(tab_cleanup),
        ],
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::focus::{reset_focus_state, set_focus_ring};
    use crate::state::keyboard::{reset_keyboard_state, KeyState, Modifiers};
    use crate::view::Control;

    fn setup() {
        reset_focus_state();
        reset_keyboard_state();
        set_focus_ring(vec![Control::AllUsers, Control::SearchField, Control::ResetAll]);
    }

    #[test]
    fn test_ctrl_c_sets_running_false() {
        setup();

        let running = Arc::new(AtomicBool::new(true));
        let handle = setup_global_keys(running.clone());

        route_keyboard_event(KeyboardEvent::new("c"));
        assert!(running.load(Ordering::SeqCst));

        route_keyboard_event(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()));
        assert!(!running.load(Ordering::SeqCst));

        handle.cleanup();
    }

    #[test]
    fn test_tab_cycles_focus() {
        setup();
        let handle = setup_global_keys(Arc::new(AtomicBool::new(true)));

        route_keyboard_event(KeyboardEvent::new("Tab"));
        assert_eq!(focus::focused(), Some(Control::AllUsers));

        route_keyboard_event(KeyboardEvent::new("Tab"));
        assert_eq!(focus::focused(), Some(Control::SearchField));

        route_keyboard_event(KeyboardEvent::new("BackTab"));
        assert_eq!(focus::focused(), Some(Control::AllUsers));

        route_keyboard_event(KeyboardEvent::with_modifiers("Tab", Modifiers::shift()));
        assert_eq!(focus::focused(), Some(Control::ResetAll));

        handle.cleanup();
    }

    #[test]
    fn test_focused_handler_runs_first() {
        setup();
        let handle = setup_global_keys(Arc::new(AtomicBool::new(true)));
        focus::focus(Control::SearchField);

        // Search field swallows Tab; global focus cycling never sees it.
        let _cleanup = keyboard::on_focused(Control::SearchField, |e| e.key == "Tab");

        assert!(route_keyboard_event(KeyboardEvent::new("Tab")));
        assert_eq!(focus::focused(), Some(Control::SearchField));

        handle.cleanup();
    }

    #[test]
    fn test_release_and_repeat_not_routed() {
        setup();
        let running = Arc::new(AtomicBool::new(true));
        let handle = setup_global_keys(running.clone());

        let mut release = KeyboardEvent::with_modifiers("c", Modifiers::ctrl());
        release.state = KeyState::Release;
        assert!(!route_keyboard_event(release));

        let mut repeat = KeyboardEvent::new("Tab");
        repeat.state = KeyState::Repeat;
        assert!(!route_keyboard_event(repeat));

        assert!(running.load(Ordering::SeqCst));
        assert_eq!(focus::focused(), None);

        handle.cleanup();
    }

    #[test]
    fn test_cleanup_removes_handlers() {
        setup();
        let running = Arc::new(AtomicBool::new(true));
        let handle = setup_global_keys(running.clone());
        handle.cleanup();

        assert!(!route_keyboard_event(KeyboardEvent::with_modifiers("c", Modifiers::ctrl())));
        assert!(running.load(Ordering::SeqCst));
    }
}
