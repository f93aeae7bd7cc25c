//! End-to-end filtering scenarios over the public API.

use product_catalog::{
    compose, derive_product_views, visible_products, Category, FilterState, Fixtures,
    HookQuery, Product, ProductView, ScreenContext, Sex, TestHook, User,
};

fn user(id: u32, name: &str, sex: Sex) -> User {
    User { id, name: name.to_string(), sex }
}

fn category(id: u32, title: &str, icon: &str, owner_id: u32) -> Category {
    Category { id, title: title.to_string(), icon: icon.to_string(), owner_id }
}

fn product(id: u32, name: &str, category_id: u32) -> Product {
    Product { id, name: name.to_string(), category_id }
}

fn state(user: &str, query: &str) -> FilterState {
    let mut state = FilterState::new();
    state.select_user(user);
    state.set_query(query);
    state
}

fn names(views: &[&ProductView]) -> Vec<String> {
    views.iter().map(|v| v.name.clone()).collect()
}

struct Scenario {
    users: Vec<User>,
    categories: Vec<Category>,
    views: Vec<ProductView>,
}

/// Milk in Grocery, owned by Max.
fn setup() -> Scenario {
    let users = vec![user(1, "Max", Sex::Male)];
    let categories = vec![category(1, "Grocery", "🍺", 1)];
    let views = derive_product_views(&[product(1, "Milk", 1)], &categories, &users);
    Scenario { users, categories, views }
}

fn hooks_for(s: &Scenario, state: &FilterState) -> Vec<product_catalog::HookRegion> {
    let visible: Vec<ProductView> = visible_products(&s.views, state).into_iter().cloned().collect();
    let theme = product_catalog::theme::terminal();
    compose(&ScreenContext {
        users: &s.users,
        categories: &s.categories,
        visible: &visible,
        state,
        focused: None,
        theme: &theme,
        width: 100,
        height: 30,
    })
    .regions
}

#[test]
fn scenario_1_join_without_filters() {
    let s = setup();
    let visible = visible_products(&s.views, &FilterState::default());

    assert_eq!(visible.len(), 1);
    let view = visible[0];
    assert_eq!(view.category.as_ref().map(|c| c.title.as_str()), Some("Grocery"));
    assert_eq!(view.user_name(), Some("Max"));
}

#[test]
fn scenario_2_unknown_user_shows_no_matches() {
    let s = setup();
    let filter = state("Anna", "");
    assert!(visible_products(&s.views, &filter).is_empty());

    let hooks = hooks_for(&s, &filter);
    assert!(hooks.has_hook(TestHook::NoMatchingMessage));
    assert!(!hooks.has_hook(TestHook::ProductTable));
}

#[test]
fn scenario_3_missing_category() {
    let s = setup();
    let views = derive_product_views(&[product(7, "Ghost", 42)], &s.categories, &s.users);
    assert_eq!(views[0].category, None);
    assert_eq!(views[0].user, None);

    let scenario = Scenario { views, ..s };
    let hooks = hooks_for(&scenario, &FilterState::default());
    assert_eq!(hooks.find_hook(TestHook::ProductCategory).unwrap().text, "No category");
    assert_eq!(hooks.find_hook(TestHook::ProductUser).unwrap().text, "");
}

#[test]
fn scenario_4_substring_match() {
    let users = vec![user(1, "Roma", Sex::Male)];
    let categories = vec![category(4, "Electronics", "💻", 1)];
    let views = derive_product_views(&[product(3, "iPhone", 4)], &categories, &users);

    assert_eq!(names(&visible_products(&views, &state("", "ph"))), vec!["iPhone"]);
    assert!(visible_products(&views, &state("", "XYZ")).is_empty());
}

#[test]
fn reset_is_idempotent_from_any_state() {
    let fixtures = Fixtures::embedded().unwrap();
    let views = fixtures.product_views();
    let baseline = visible_products(&views, &FilterState::default());

    for (user, query) in [("", ""), ("Roma", ""), ("", "an"), ("Anna", "zzz"), ("Nobody", "Milk")] {
        let mut s = state(user, query);
        s.reset_filters();
        assert_eq!(s, FilterState::default());
        assert_eq!(visible_products(&views, &s), baseline);

        s.reset_filters();
        assert_eq!(visible_products(&views, &s), baseline);
    }
}

#[test]
fn query_never_expands_result() {
    let fixtures = Fixtures::embedded().unwrap();
    let views = fixtures.product_views();

    let mut filters: Vec<String> = vec![String::new()];
    filters.extend(fixtures.users().iter().map(|u| u.name.clone()));

    for user_filter in &filters {
        let unfiltered = visible_products(&views, &state(user_filter, ""));
        for query in ["a", "an", "Ban", "i", "zz"] {
            let narrowed = visible_products(&views, &state(user_filter, query));
            assert!(narrowed.len() <= unfiltered.len());
            assert!(narrowed.iter().all(|v| unfiltered.contains(v)));
        }
    }
}

#[test]
fn query_is_case_insensitive() {
    let users = vec![user(1, "Max", Sex::Male)];
    let categories = vec![category(1, "Grocery", "🍞", 1)];
    let products = vec![product(1, "Roma Tomatoes", 1), product(2, "Bread", 1)];
    let views = derive_product_views(&products, &categories, &users);

    let upper = visible_products(&views, &state("", "ROMA"));
    let lower = visible_products(&views, &state("", "roma"));
    assert_eq!(upper, lower);
    assert_eq!(names(&upper), vec!["Roma Tomatoes"]);
}

#[test]
fn user_filter_is_case_sensitive() {
    let s = setup();
    assert_eq!(visible_products(&s.views, &state("Max", "")).len(), 1);
    assert!(visible_products(&s.views, &state("max", "")).is_empty());
}

#[test]
fn join_preserves_order_and_ids() {
    let fixtures = Fixtures::embedded().unwrap();
    let views = fixtures.product_views();

    assert_eq!(views.len(), fixtures.products().len());
    for (view, product) in views.iter().zip(fixtures.products()) {
        assert_eq!(view.id, product.id);
        assert_eq!(view.name, product.name);
    }
}
