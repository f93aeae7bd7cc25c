//! Catalog entities.
//!
//! Field names serialize in camelCase so fixture files keep the shape the
//! data module has always produced (`ownerId`, `categoryId`).

use serde::{Deserialize, Serialize};

/// Numeric identifier shared by all three collections.
pub type Id = u32;

/// User sex marker. Only drives the color of the user cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "m",
            Self::Female => "f",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub name: String,
    pub sex: Sex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Id,
    pub title: String,
    /// Single glyph shown before the title.
    pub icon: String,
    pub owner_id: Id,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Id,
    pub name: String,
    pub category_id: Id,
}

/// A product joined with its category and that category's owner.
///
/// `user` is always `None` when `category` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: Id,
    pub name: String,
    pub category_id: Id,
    pub category: Option<Category>,
    pub user: Option<User>,
}

impl ProductView {
    /// Name of the resolved owner, if any.
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_uses_camel_case() {
        let category: Category =
            serde_json::from_str(r#"{"id":3,"title":"Fruits","icon":"🍏","ownerId":2}"#).unwrap();
        assert_eq!(category.owner_id, 2);
        assert_eq!(category.icon, "🍏");
    }

    #[test]
    fn test_sex_wire_values() {
        let user: User = serde_json::from_str(r#"{"id":1,"name":"Anna","sex":"f"}"#).unwrap();
        assert_eq!(user.sex, Sex::Female);
        assert_eq!(user.sex.as_str(), "f");

        let bad = serde_json::from_str::<User>(r#"{"id":1,"name":"X","sex":"x"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_user_name_absent() {
        let view = ProductView {
            id: 1,
            name: "Milk".to_string(),
            category_id: 9,
            category: None,
            user: None,
        };
        assert_eq!(view.user_name(), None);
    }
}
