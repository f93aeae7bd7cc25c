//! Fixture data - the three static collections.
//!
//! The default dataset is compiled in from `data/*.json`. A directory holding
//! the same three files can replace it at startup. Either way the result is
//! validated once (ids unique per collection) and never changes afterwards.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::join::derive_product_views;
use super::model::{Category, Id, Product, ProductView, User};
use crate::error::{CatalogError, Result};

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

const EMBEDDED_USERS: &str = include_str!("../../data/users.json");
const EMBEDDED_CATEGORIES: &str = include_str!("../../data/categories.json");
const EMBEDDED_PRODUCTS: &str = include_str!("../../data/products.json");

/// Users, categories and products, with unique ids in each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixtures {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Fixtures {
    /// Validate and wrap the three collections.
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Result<Self> {
        ensure_unique("user", users.iter().map(|u| u.id))?;
        ensure_unique("category", categories.iter().map(|c| c.id))?;
        ensure_unique("product", products.iter().map(|p| p.id))?;

        Ok(Self {
            users,
            categories,
            products,
        })
    }

    /// The built-in dataset.
    pub fn embedded() -> Result<Self> {
        let users = parse_json("<embedded:users>", EMBEDDED_USERS)?;
        let categories = parse_json("<embedded:categories>", EMBEDDED_CATEGORIES)?;
        let products = parse_json("<embedded:products>", EMBEDDED_PRODUCTS)?;

        let fixtures = Self::new(users, categories, products)?;
        debug!(
            users = fixtures.users.len(),
            categories = fixtures.categories.len(),
            products = fixtures.products.len(),
            "loaded embedded fixtures"
        );
        Ok(fixtures)
    }

    /// Load `users.json`, `categories.json` and `products.json` from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let users = read_json(&dir.join(USERS_FILE))?;
        let categories = read_json(&dir.join(CATEGORIES_FILE))?;
        let products = read_json(&dir.join(PRODUCTS_FILE))?;

        let fixtures = Self::new(users, categories, products)?;
        info!(
            dir = %dir.display(),
            users = fixtures.users.len(),
            categories = fixtures.categories.len(),
            products = fixtures.products.len(),
            "loaded fixtures from directory"
        );
        Ok(fixtures)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Join every product to its category and owner.
    pub fn product_views(&self) -> Vec<ProductView> {
        derive_product_views(&self.products, &self.categories, &self.users)
    }
}

fn ensure_unique(collection: &'static str, ids: impl Iterator<Item = Id>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

fn parse_json<T: DeserializeOwned>(origin: &str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|source| CatalogError::Json {
        path: origin.to_string(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&path.display().to_string(), &text)
}
