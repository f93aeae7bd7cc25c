//! Keyboard Module - Keyboard event state and handler registry
//!
//! State and handler registry for keyboard events.
//! Does NOT own stdin (that is the input module).
//! Does NOT decide routing priority (that is `global_keys::route_keyboard_event`).
//!
//! # API
//!
//! - `on(handler)` - Subscribe to all keyboard events
//! - `on_key(key, fn)` - Subscribe to specific key(s)
//! - `on_focused(control, fn)` - Subscribe while a control has focus
//!
//! # Example
//!
//! ```ignore
//! use product_catalog::state::keyboard;
//!
//! let cleanup = keyboard::on_key("Escape", || {
//!     store.clear_query();
//!     true // Consume event
//! });
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::view::Control;

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowUp")
    pub key: String,
    pub modifiers: Modifiers,
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }

    /// The character this event types, if it is a plain printable key.
    ///
    /// Shift is allowed (it is how upper case arrives); Ctrl and Alt are not.
    pub fn printable_char(&self) -> Option<char> {
        if self.modifiers.ctrl || self.modifiers.alt {
            return None;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

/// Handler for keyboard events. Return true to consume the event.
pub type KeyHandler = Box<dyn Fn(&KeyboardEvent) -> bool>;

/// Handler for specific key. Return true to consume the event.
pub type KeySpecificHandler = Box<dyn Fn() -> bool>;

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

struct HandlerRegistry {
    global_handlers: Vec<(usize, KeyHandler)>,
    key_handlers: HashMap<String, Vec<(usize, KeySpecificHandler)>>,
    focused_handlers: HashMap<Control, Vec<(usize, KeyHandler)>>,
    next_id: usize,
}

impl HandlerRegistry {
    fn new() -> Self {
        Self {
            global_handlers: Vec::new(),
            key_handlers: HashMap::new(),
            focused_handlers: HashMap::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

thread_local! {
    static REGISTRY: RefCell<HandlerRegistry> = RefCell::new(HandlerRegistry::new());
}

// =============================================================================
// EVENT DISPATCH
// =============================================================================

/// Dispatch to key-specific and global handlers (not focused).
/// Returns true if any handler consumed the event.
pub fn dispatch_to_handlers(event: &KeyboardEvent) -> bool {
    REGISTRY.with(|reg| {
        let reg = reg.borrow();

        if let Some(handlers) = reg.key_handlers.get(&event.key) {
            for (_, handler) in handlers {
                if handler() {
                    return true;
                }
            }
        }

        for (_, handler) in &reg.global_handlers {
            if handler(event) {
                return true;
            }
        }

        false
    })
}

/// Dispatch to the handlers registered for the focused control.
/// Returns true if consumed.
pub fn dispatch_focused(focused: Option<Control>, event: &KeyboardEvent) -> bool {
    let Some(control) = focused else {
        return false;
    };
    if !event.is_press() {
        return false;
    }

    REGISTRY.with(|reg| {
        let reg = reg.borrow();
        if let Some(handlers) = reg.focused_handlers.get(&control) {
            for (_, handler) in handlers {
                if handler(event) {
                    return true;
                }
            }
        }
        false
    })
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Subscribe to all keyboard events.
/// Return true from handler to consume the event.
/// Returns cleanup function.
pub fn on<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&KeyboardEvent) -> bool + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.global_handlers.push((id, Box::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            reg.global_handlers.retain(|(handler_id, _)| *handler_id != id);
        });
    }
}

/// Subscribe to a specific key.
/// Returns cleanup function.
pub fn on_key<F>(key: &str, handler: F) -> impl FnOnce() + use<F>
where
    F: Fn() -> bool + 'static,
{
    let key = key.to_string();
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.key_handlers
            .entry(key.clone())
            .or_default()
            .push((id, Box::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(handlers) = reg.key_handlers.get_mut(&key) {
                handlers.retain(|(handler_id, _)| *handler_id != id);
                if handlers.is_empty() {
                    reg.key_handlers.remove(&key);
                }
            }
        });
    }
}

/// Subscribe to events while `control` has focus.
/// Returns cleanup function.
pub fn on_focused<F>(control: Control, handler: F) -> impl FnOnce()
where
    F: Fn(&KeyboardEvent) -> bool + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.focused_handlers
            .entry(control)
            .or_default()
            .push((id, Box::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(handlers) = reg.focused_handlers.get_mut(&control) {
                handlers.retain(|(handler_id, _)| *handler_id != id);
                if handlers.is_empty() {
                    reg.focused_handlers.remove(&control);
                }
            }
        });
    }
}

/// Reset keyboard state (for testing)
pub fn reset_keyboard_state() {
    REGISTRY.with(|reg| {
        *reg.borrow_mut() = HandlerRegistry::new();
    });
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_keyboard_state();
    }

    #[test]
    fn test_key_specific_handler_and_cleanup() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let cleanup = on_key("Escape", move || {
            count_clone.set(count_clone.get() + 1);
            true
        });

        dispatch_to_handlers(&KeyboardEvent::new("a"));
        assert_eq!(count.get(), 0);

        dispatch_to_handlers(&KeyboardEvent::new("Escape"));
        assert_eq!(count.get(), 1);

        cleanup();
        dispatch_to_handlers(&KeyboardEvent::new("Escape"));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_key_handler_consumes_before_global() {
        setup();

        let reached = Rc::new(Cell::new(false));
        let reached_clone = reached.clone();

        let _c1 = on_key("Enter", || true);
        let _c2 = on(move |_| {
            reached_clone.set(true);
            false
        });

        assert!(dispatch_to_handlers(&KeyboardEvent::new("Enter")));
        assert!(!reached.get());
    }

    #[test]
    fn test_focused_handler() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let cleanup = on_focused(Control::SearchField, move |_| {
            count_clone.set(count_clone.get() + 1);
            true
        });

        let event = KeyboardEvent::new("x");
        assert!(!dispatch_focused(Some(Control::ResetAll), &event));
        assert!(!dispatch_focused(None, &event));
        assert!(dispatch_focused(Some(Control::SearchField), &event));
        assert_eq!(count.get(), 1);

        cleanup();
        assert!(!dispatch_focused(Some(Control::SearchField), &event));
    }

    #[test]
    fn test_printable_char() {
        assert_eq!(KeyboardEvent::new("a").printable_char(), Some('a'));
        assert_eq!(
            KeyboardEvent::with_modifiers("A", Modifiers::shift()).printable_char(),
            Some('A')
        );
        assert_eq!(KeyboardEvent::new(" ").printable_char(), Some(' '));
        assert_eq!(KeyboardEvent::new("Enter").printable_char(), None);
        assert_eq!(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()).printable_char(), None);
    }
}
