//! State Module - Runtime state management systems
//!
//! - **Filters** - signal-backed filter state and the visible derived
//! - **Keyboard** - Event types, dispatch, handler registry
//! - **Focus** - Focus ring over the screen's controls
//! - **Global keys** - Ctrl+C, Tab/Shift+Tab, and the routing chain
//! - **Filter keys** - bindings that emit filter transitions
//! - **Mouse** - HitGrid and click dispatch
//! - **Input** - crossterm event conversion and polling

pub mod filter_keys;
pub mod filters;
pub mod focus;
pub mod global_keys;
pub mod input;
pub mod keyboard;
pub mod mouse;

pub use filters::FilterStore;
pub use keyboard::{KeyState, KeyboardEvent, Modifiers};
