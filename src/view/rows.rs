//! Table row formatting.

use crate::catalog::{ProductView, Sex};
use crate::theme::Theme;
use crate::types::Rgba;

/// Placeholder for a product whose category did not resolve.
pub const NO_CATEGORY: &str = "No category";

/// Color role of the user cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTone {
    /// Female owners.
    Danger,
    /// Male owners.
    Link,
}

impl UserTone {
    pub fn for_sex(sex: Sex) -> Self {
        match sex {
            Sex::Female => Self::Danger,
            Sex::Male => Self::Link,
        }
    }

    pub fn color(&self, theme: &Theme) -> Rgba {
        match self {
            Self::Danger => theme.danger(),
            Self::Link => theme.link(),
        }
    }
}

/// Display strings for one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Empty when the owner did not resolve.
    pub user: String,
    pub user_tone: Option<UserTone>,
}

impl ProductRow {
    pub fn from_view(view: &ProductView) -> Self {
        let category = match &view.category {
            Some(c) => format!("{} - {}", c.icon, c.title),
            None => NO_CATEGORY.to_string(),
        };

        Self {
            id: view.id.to_string(),
            name: view.name.clone(),
            category,
            user: view.user.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
            user_tone: view.user.as_ref().map(|u| UserTone::for_sex(u.sex)),
        }
    }
}
