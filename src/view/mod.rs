//! View - what the screen shows and where.
//!
//! - [`control`] - focusable / clickable controls and their tab order
//! - [`hooks`] - stable test hook names and their screen regions
//! - [`rows`] - table row formatting
//! - [`screen`] - frame composition

pub mod control;
pub mod hooks;
pub mod rows;
pub mod screen;

pub use control::{focus_order, Control};
pub use hooks::{HookQuery, HookRegion, TestHook};
pub use rows::{ProductRow, UserTone, NO_CATEGORY};
pub use screen::{compose, HitRect, ScreenContext, ScreenFrame, NO_MATCHING_MESSAGE};
