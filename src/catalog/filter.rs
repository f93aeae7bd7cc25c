//! Filter state and the visible-products pipeline.
//!
//! Two independent predicates, both applied:
//! - **user**: exact, case-sensitive match on the resolved owner's name
//! - **text**: case-folded substring match on the product name
//!
//! An empty value disables the corresponding predicate.

use super::model::ProductView;

// =============================================================================
// FILTER STATE
// =============================================================================

/// Current filter values. Empty strings mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub user_for_filter: String,
    pub query: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to products owned by `name`. Selecting the active user again
    /// leaves it selected.
    pub fn select_user(&mut self, name: impl Into<String>) {
        self.user_for_filter = name.into();
    }

    pub fn select_all_users(&mut self) {
        self.user_for_filter.clear();
    }

    /// Stored verbatim: no trimming.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn reset_filters(&mut self) {
        self.select_all_users();
        self.clear_query();
    }

    pub fn has_user_filter(&self) -> bool {
        !self.user_for_filter.is_empty()
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// True when `name` is the selected user tab.
    pub fn is_user_selected(&self, name: &str) -> bool {
        self.has_user_filter() && self.user_for_filter == name
    }
}

// =============================================================================
// PREDICATES
// =============================================================================

/// User predicate. Views without a resolved owner fail once a user is selected.
pub fn matches_user(view: &ProductView, user_for_filter: &str) -> bool {
    if user_for_filter.is_empty() {
        return true;
    }
    view.user_name() == Some(user_for_filter)
}

/// Text predicate. Empty query matches everything.
pub fn matches_query(view: &ProductView, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    view.name.to_lowercase().contains(&query.to_lowercase())
}

// =============================================================================
// PIPELINE
// =============================================================================

/// The subset of `views` passing both predicates, in input order.
pub fn visible_products<'a>(views: &'a [ProductView], state: &FilterState) -> Vec<&'a ProductView> {
    views
        .iter()
        .filter(|view| matches_user(view, &state.user_for_filter))
        .filter(|view| matches_query(view, &state.query))
        .collect()
}
