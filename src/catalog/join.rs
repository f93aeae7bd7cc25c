//! Join products to their category and owner.
//!
//! Runs once at startup. Lookups go through id indexes and are total: a
//! dangling `category_id` or `owner_id` yields `None`, never an error.

use std::collections::HashMap;

use super::model::{Category, Id, Product, ProductView, User};

/// Build one [`ProductView`] per product, in product order.
pub fn derive_product_views(
    products: &[Product],
    categories: &[Category],
    users: &[User],
) -> Vec<ProductView> {
    let categories_by_id: HashMap<Id, &Category> = categories.iter().map(|c| (c.id, c)).collect();
    let users_by_id: HashMap<Id, &User> = users.iter().map(|u| (u.id, u)).collect();

    products
        .iter()
        .map(|product| {
            let category = categories_by_id.get(&product.category_id).copied();
            // No category means no owner; never fall back to a default user.
            let user = category.and_then(|c| users_by_id.get(&c.owner_id).copied());

            ProductView {
                id: product.id,
                name: product.name.clone(),
                category_id: product.category_id,
                category: category.cloned(),
                user: user.cloned(),
            }
        })
        .collect()
}
