//! Focus System - Keyboard navigation and focus state
//!
//! Manages focus across the screen's controls:
//! - `focused` signal (currently focused control)
//! - Focus ring (Tab/Shift+Tab), wrapping at both ends
//! - Ring updates when controls appear or disappear
//!
//! The ring is replaced by the app whenever the set of controls changes (the
//! clear button comes and goes with the query).
//!
//! # Example
//!
//! ```ignore
//! use product_catalog::state::focus;
//!
//! focus::set_focus_ring(vec![Control::AllUsers, Control::SearchField]);
//! focus::focus_next();
//! assert_eq!(focus::focused(), Some(Control::AllUsers));
//! ```

use std::cell::RefCell;

use spark_signals::{signal, Signal};

use crate::view::Control;

// =============================================================================
// FOCUSED CONTROL SIGNAL
// =============================================================================

thread_local! {
    static FOCUSED: Signal<Option<Control>> = signal(None);
    static FOCUS_RING: RefCell<Vec<Control>> = const { RefCell::new(Vec::new()) };
}

/// Get the currently focused control
pub fn focused() -> Option<Control> {
    FOCUSED.with(|s| s.get())
}

/// Check if any control is focused
pub fn has_focus() -> bool {
    focused().is_some()
}

/// Check if a specific control is focused
pub fn is_focused(control: Control) -> bool {
    focused() == Some(control)
}

/// Focus a control. Ignored if the control is not in the ring.
pub fn focus(control: Control) -> bool {
    let known = FOCUS_RING.with(|ring| ring.borrow().contains(&control));
    if known {
        set_focused(Some(control));
    }
    known
}

/// Clear focus
pub fn blur() {
    set_focused(None);
}

fn set_focused(control: Option<Control>) {
    if focused() != control {
        FOCUSED.with(|s| s.set(control));
    }
}

// =============================================================================
// FOCUS RING
// =============================================================================

/// Current ring, in tab order.
pub fn focus_ring() -> Vec<Control> {
    FOCUS_RING.with(|ring| ring.borrow().clone())
}

/// Replace the ring.
///
/// If the focused control is gone, focus moves to the nearest control before
/// it (in the old order) that still exists, so removing the clear button
/// hands focus back to the search field.
pub fn set_focus_ring(controls: Vec<Control>) {
    let old = FOCUS_RING.with(|ring| ring.replace(controls.clone()));

    let Some(current) = focused() else {
        return;
    };
    if controls.contains(&current) {
        return;
    }

    let fallback = old
        .iter()
        .position(|c| *c == current)
        .and_then(|pos| old[..pos].iter().rev().find(|c| controls.contains(c)).copied())
        .or_else(|| controls.first().copied());
    set_focused(fallback);
}

/// Move focus to the next control (wraps).
pub fn focus_next() -> Option<Control> {
    step(1)
}

/// Move focus to the previous control (wraps).
pub fn focus_previous() -> Option<Control> {
    step(-1)
}

fn step(direction: isize) -> Option<Control> {
    let ring = focus_ring();
    if ring.is_empty() {
        return None;
    }

    let len = ring.len() as isize;
    let next = match focused().and_then(|c| ring.iter().position(|r| *r == c)) {
        Some(pos) => (pos as isize + direction).rem_euclid(len),
        None if direction > 0 => 0,
        None => len - 1,
    };

    let control = ring[next as usize];
    set_focused(Some(control));
    Some(control)
}

/// Reset all focus state (for testing)
pub fn reset_focus_state() {
    FOCUS_RING.with(|ring| ring.borrow_mut().clear());
    FOCUSED.with(|s| s.set(None));
}

// =============================================================================
// TESTS
// =============================================================================
