//! Filter Store - reactive filter state over the cached product views.
//!
//! Holds the two filter values as signals and exposes the visible collection
//! as a derived. Reading either inside an effect creates a dependency, so the
//! render effect re-runs after every transition.
//!
//! # Example
//!
//! ```ignore
//! use product_catalog::state::FilterStore;
//!
//! let store = FilterStore::new(fixtures.product_views());
//! let visible = store.create_visible_derived();
//!
//! store.select_user("Roma");
//! store.set_query("ph");
//! assert_eq!(visible.get().len(), 1);
//! ```

use std::rc::Rc;

use spark_signals::{derived, signal, Derived, Signal};
use tracing::debug;

use crate::catalog::{visible_products, FilterState, ProductView};

/// Signal-backed [`FilterState`] plus the views it filters.
///
/// Cloning shares the same signals and views.
#[derive(Clone)]
pub struct FilterStore {
    views: Rc<Vec<ProductView>>,
    user_for_filter: Signal<String>,
    query: Signal<String>,
}

impl FilterStore {
    /// Start with no filters active.
    pub fn new(views: Vec<ProductView>) -> Self {
        Self::with_state(views, FilterState::default())
    }

    pub fn with_state(views: Vec<ProductView>, initial: FilterState) -> Self {
        Self {
            views: Rc::new(views),
            user_for_filter: signal(initial.user_for_filter),
            query: signal(initial.query),
        }
    }

    /// All product views, unfiltered.
    pub fn views(&self) -> &[ProductView] {
        &self.views
    }

    /// Current filter values (tracked read).
    pub fn state(&self) -> FilterState {
        FilterState {
            user_for_filter: self.user_for_filter.get(),
            query: self.query.get(),
        }
    }

    pub fn user_for_filter(&self) -> String {
        self.user_for_filter.get()
    }

    pub fn query(&self) -> String {
        self.query.get()
    }

    /// Visible collection for the current state (tracked read, recomputed).
    pub fn visible(&self) -> Vec<ProductView> {
        let state = self.state();
        visible_products(&self.views, &state).into_iter().cloned().collect()
    }

    /// Derived visible collection. Re-runs when either filter signal changes.
    pub fn create_visible_derived(&self) -> Derived<Vec<ProductView>> {
        let store = self.clone();
        derived(move || store.visible())
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    pub fn select_user(&self, name: &str) {
        self.transition("select_user", |s| s.select_user(name));
    }

    pub fn select_all_users(&self) {
        self.transition("select_all_users", FilterState::select_all_users);
    }

    pub fn set_query(&self, text: &str) {
        self.transition("set_query", |s| s.set_query(text));
    }

    pub fn clear_query(&self) {
        self.transition("clear_query", FilterState::clear_query);
    }

    pub fn reset_filters(&self) {
        self.transition("reset_filters", FilterState::reset_filters);
    }

    /// Apply a pure transition and write back only the fields it changed.
    fn transition(&self, name: &'static str, apply: impl FnOnce(&mut FilterState)) {
        let before = self.state();
        let mut after = before.clone();
        apply(&mut after);

        debug!(
            transition = name,
            user = %after.user_for_filter,
            query = %after.query,
            "filter transition"
        );

        if after.user_for_filter != before.user_for_filter {
            self.user_for_filter.set(after.user_for_filter);
        }
        if after.query != before.query {
            self.query.set(after.query);
        }
    }
}
