//! Stable test hooks.
//!
//! Each labelled element of the screen is reported as a [`HookRegion`] so
//! external tooling can locate it without scraping text. Names match the
//! `data-cy` attributes of the web version of this view.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TestHook {
    /// Present only while at least one product is visible.
    ProductTable,
    Product,
    ProductId,
    ProductName,
    ProductCategory,
    ProductUser,
    FilterAllUsers,
    FilterUser,
    SearchField,
    /// Present only while the query is non-empty.
    ClearButton,
    /// Present exactly when no product is visible.
    NoMatchingMessage,
    AllCategories,
    Category,
    ResetAllButton,
    SortIcon,
}

impl TestHook {
    pub const ALL: [TestHook; 15] = [
        Self::ProductTable,
        Self::Product,
        Self::ProductId,
        Self::ProductName,
        Self::ProductCategory,
        Self::ProductUser,
        Self::FilterAllUsers,
        Self::FilterUser,
        Self::SearchField,
        Self::ClearButton,
        Self::NoMatchingMessage,
        Self::AllCategories,
        Self::Category,
        Self::ResetAllButton,
        Self::SortIcon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductTable => "ProductTable",
            Self::Product => "Product",
            Self::ProductId => "ProductId",
            Self::ProductName => "ProductName",
            Self::ProductCategory => "ProductCategory",
            Self::ProductUser => "ProductUser",
            Self::FilterAllUsers => "FilterAllUsers",
            Self::FilterUser => "FilterUser",
            Self::SearchField => "SearchField",
            Self::ClearButton => "ClearButton",
            Self::NoMatchingMessage => "NoMatchingMessage",
            Self::AllCategories => "AllCategories",
            Self::Category => "Category",
            Self::ResetAllButton => "ResetAllButton",
            Self::SortIcon => "SortIcon",
        }
    }
}

impl std::fmt::Display for TestHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a hooked element landed on screen.
///
/// `height` is 1 for everything but the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookRegion {
    pub hook: TestHook,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    /// Visible text of the element (empty for containers).
    pub text: String,
}

impl HookRegion {
    pub fn new(hook: TestHook, x: u16, y: u16, width: u16, text: impl Into<String>) -> Self {
        Self {
            hook,
            x,
            y,
            width,
            height: 1,
            text: text.into(),
        }
    }
}

/// Query helpers over a list of regions.
pub trait HookQuery {
    fn find_hook(&self, hook: TestHook) -> Option<&HookRegion>;
    fn hooks(&self, hook: TestHook) -> Vec<&HookRegion>;
    fn has_hook(&self, hook: TestHook) -> bool {
        self.find_hook(hook).is_some()
    }
}

impl HookQuery for [HookRegion] {
    fn find_hook(&self, hook: TestHook) -> Option<&HookRegion> {
        self.iter().find(|r| r.hook == hook)
    }

    fn hooks(&self, hook: TestHook) -> Vec<&HookRegion> {
        self.iter().filter(|r| r.hook == hook).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_serialized_form() {
        for hook in TestHook::ALL {
            let json = serde_json::to_string(&hook).unwrap();
            assert_eq!(json, format!("\"{}\"", hook.as_str()));
        }
    }

    #[test]
    fn test_region_json() {
        let region = HookRegion::new(TestHook::ProductName, 8, 12, 4, "Milk");
        let json = serde_json::to_value(&region).unwrap();
        assert_eq!(json["hook"], "ProductName");
        assert_eq!(json["text"], "Milk");
        assert_eq!(json["height"], 1);
    }

    #[test]
    fn test_query() {
        let regions = vec![
            HookRegion::new(TestHook::FilterUser, 0, 0, 4, "Roma"),
            HookRegion::new(TestHook::FilterUser, 6, 0, 4, "Anna"),
        ];
        assert_eq!(regions.hooks(TestHook::FilterUser).len(), 2);
        assert!(!regions.has_hook(TestHook::ClearButton));
    }
}
