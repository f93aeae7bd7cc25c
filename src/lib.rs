//! # product-catalog
//!
//! Filterable product table for the terminal.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! Three fixture collections (users, categories, products) are joined once
//! into product views. Two filter signals (selected user, search text) drive
//! a derived visible collection; one render effect composes the screen.
//! ```text
//! Fixtures → derive_product_views → FilterStore → visible derived → render effect
//!                                       ↑
//!                key / mouse bindings ──┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Entities, fixtures, the join and the filter pipeline
//! - [`state`] - Filter store, keyboard, focus, mouse, input routing
//! - [`view`] - Controls, test hooks, row formatting, screen composition
//! - [`renderer`] - Frame buffer and diff rendering
//! - [`pipeline`] - Terminal size, mount / run / unmount, snapshots
//! - [`theme`] - Semantic colors and presets

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod types;
pub mod view;

// Re-export commonly used items
pub use types::*;

pub use catalog::{
    derive_product_views, visible_products, Category, FilterState, Fixtures, Id, Product,
    ProductView, Sex, User,
};

pub use error::{CatalogError, Result};

pub use pipeline::{mount, run, snapshot, tick, unmount, MountHandle, ScreenSource};

pub use renderer::{DiffRenderer, FrameBuffer};

pub use state::{FilterStore, KeyboardEvent, KeyState, Modifiers};

pub use theme::{get_preset, preset_names, resolve_preset, Theme, ThemeColor};

pub use view::{
    compose, focus_order, Control, HookQuery, HookRegion, ScreenContext, ScreenFrame, TestHook,
};
