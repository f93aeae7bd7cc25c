//! Catalog core - entities, fixtures, the join and the filter pipeline.
//!
//! ```text
//! Fixtures → derive_product_views → visible_products(views, FilterState)
//! ```
//!
//! Everything here is pure and single-threaded. The reactive wrapper lives in
//! [`crate::state::filters`].

pub mod filter;
pub mod fixtures;
pub mod join;
pub mod model;

pub use filter::{matches_query, matches_user, visible_products, FilterState};
pub use fixtures::Fixtures;
pub use join::derive_product_views;
pub use model::{Category, Id, Product, ProductView, Sex, User};
