//! Mouse Module - Hit grid and click handler registry
//!
//! HitGrid for coordinate-to-control lookup, refilled from each composed
//! screen. Click handlers receive the control under the pointer.
//! Does NOT own stdin (that is the input module).
//!
//! # Example
//!
//! ```ignore
//! use product_catalog::state::mouse;
//!
//! let cleanup = mouse::on_click(|control| {
//!     println!("clicked {:?}", control);
//!     true // Consume event
//! });
//! ```

use std::cell::RefCell;

use crate::view::Control;

// =============================================================================
// TYPES
// =============================================================================

/// Mouse action type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Up,
    Move,
    Drag,
    Scroll,
}

/// Mouse button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    #[default]
    None,
}

/// Mouse event
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    pub action: MouseAction,
    pub button: MouseButton,
    /// X coordinate (0-indexed)
    pub x: u16,
    /// Y coordinate (0-indexed)
    pub y: u16,
}

impl MouseEvent {
    pub fn new(action: MouseAction, button: MouseButton, x: u16, y: u16) -> Self {
        Self { action, button, x, y }
    }

    /// Create a mouse down event
    pub fn down(button: MouseButton, x: u16, y: u16) -> Self {
        Self::new(MouseAction::Down, button, x, y)
    }
}

// =============================================================================
// HIT GRID - O(1) Coordinate to Control Lookup
// =============================================================================

/// A grid for O(1) mouse hit detection.
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<Option<Control>>,
}

impl HitGrid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Resize the grid, clearing all contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.resize(width as usize * height as usize, None);
        self.clear();
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill a rectangle, clipped to the grid.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, control: Control) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for cy in y..y_end {
            for cx in x..x_end {
                let idx = cy as usize * self.width as usize + cx as usize;
                self.cells[idx] = Some(control);
            }
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Control> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }
}

// =============================================================================
// STATE
// =============================================================================

type ClickHandler = Box<dyn Fn(Control) -> bool>;

thread_local! {
    static HIT_GRID: RefCell<HitGrid> = RefCell::new(HitGrid::new(0, 0));
    static CLICK_HANDLERS: RefCell<(usize, Vec<(usize, ClickHandler)>)> = RefCell::new((0, Vec::new()));
}

pub fn resize_hit_grid(width: u16, height: u16) {
    HIT_GRID.with(|g| g.borrow_mut().resize(width, height));
}

pub fn hit_grid_size() -> (u16, u16) {
    HIT_GRID.with(|g| g.borrow().size())
}

pub fn clear_hit_grid() {
    HIT_GRID.with(|g| g.borrow_mut().clear());
}

pub fn fill_hit_rect(x: u16, y: u16, width: u16, height: u16, control: Control) {
    HIT_GRID.with(|g| g.borrow_mut().fill_rect(x, y, width, height, control));
}

/// Control under (x, y), if any.
pub fn hit_test(x: u16, y: u16) -> Option<Control> {
    HIT_GRID.with(|g| g.borrow().get(x, y))
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Subscribe to clicks on controls. Returns cleanup function.
pub fn on_click<F>(handler: F) -> impl FnOnce()
where
    F: Fn(Control) -> bool + 'static,
{
    let id = CLICK_HANDLERS.with(|h| {
        let mut h = h.borrow_mut();
        let id = h.0;
        h.0 += 1;
        h.1.push((id, Box::new(handler)));
        id
    });

    move || {
        CLICK_HANDLERS.with(|h| h.borrow_mut().1.retain(|(handler_id, _)| *handler_id != id));
    }
}

/// Dispatch a mouse event. Left button down over a control is a click.
/// Returns true if a handler consumed it.
pub fn dispatch(event: MouseEvent) -> bool {
    if event.action != MouseAction::Down || event.button != MouseButton::Left {
        return false;
    }
    let Some(control) = hit_test(event.x, event.y) else {
        return false;
    };

    CLICK_HANDLERS.with(|h| {
        let h = h.borrow();
        h.1.iter().any(|(_, handler)| handler(control))
    })
}

/// Reset mouse state (for testing)
pub fn reset_mouse_state() {
    HIT_GRID.with(|g| *g.borrow_mut() = HitGrid::new(0, 0));
    CLICK_HANDLERS.with(|h| *h.borrow_mut() = (0, Vec::new()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_hit_grid() {
        let mut grid = HitGrid::new(10, 10);
        assert_eq!(grid.get(5, 5), None);

        grid.fill_rect(2, 2, 4, 4, Control::ResetAll);
        assert_eq!(grid.get(3, 3), Some(Control::ResetAll));
        assert_eq!(grid.get(5, 5), Some(Control::ResetAll));
        assert_eq!(grid.get(0, 0), None);
        assert_eq!(grid.get(8, 8), None);

        grid.clear();
        assert_eq!(grid.get(3, 3), None);
    }

    #[test]
    fn test_hit_grid_clips() {
        let mut grid = HitGrid::new(4, 2);
        grid.fill_rect(2, 1, 10, 10, Control::SearchField);
        assert_eq!(grid.get(3, 1), Some(Control::SearchField));
        assert_eq!(grid.get(4, 1), None);
    }

    #[test]
    fn test_click_dispatch() {
        reset_mouse_state();
        resize_hit_grid(20, 5);
        fill_hit_rect(0, 0, 5, 1, Control::AllUsers);

        let clicked = Rc::new(Cell::new(None));
        let clicked_clone = clicked.clone();
        let cleanup = on_click(move |control| {
            clicked_clone.set(Some(control));
            true
        });

        // Right button and empty cells are ignored.
        assert!(!dispatch(MouseEvent::down(MouseButton::Right, 1, 0)));
        assert!(!dispatch(MouseEvent::down(MouseButton::Left, 10, 3)));
        assert_eq!(clicked.get(), None);

        assert!(dispatch(MouseEvent::down(MouseButton::Left, 2, 0)));
        assert_eq!(clicked.get(), Some(Control::AllUsers));

        cleanup();
        assert!(!dispatch(MouseEvent::down(MouseButton::Left, 2, 0)));
    }
}
