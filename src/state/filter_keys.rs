//! Filter Keys - input bindings that emit filter transitions
//!
//! The only writers of the [`FilterStore`]:
//!
//! | Input | Transition |
//! |---|---|
//! | Enter / Space on "All" tab, or click | `select_all_users` |
//! | Enter / Space on a user tab, or click | `select_user(name)` |
//! | ArrowLeft / ArrowRight on a tab | move to neighbouring tab and select it |
//! | Typing / Backspace in the search field | `set_query` |
//! | Escape, or the clear button | `clear_query` |
//! | Ctrl+R, or the reset button | `reset_filters` |
//!
//! Also: `/` focuses the search field, `q` quits when not typing.
//! After every transition the focus ring is rebuilt, since the clear button
//! exists only while the query is non-empty.

use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use super::filters::FilterStore;
use super::keyboard::{self, KeyboardEvent};
use super::{focus, mouse};
use crate::catalog::User;
use crate::view::{focus_order, Control};

/// Cleanup handle for filter bindings
pub struct FilterKeysHandle {
    cleanups: Vec<Box<dyn FnOnce()>>,
}

impl FilterKeysHandle {
    pub fn cleanup(self) {
        for cleanup in self.cleanups {
            cleanup();
        }
    }
}

/// Rebuild the focus ring for the current filter state.
pub fn sync_focus_ring(store: &FilterStore, users: &[User]) {
    focus::set_focus_ring(focus_order(users, &store.state()));
}

/// Perform the action behind a control. Returns false for controls with no
/// action (the search field only takes focus).
pub fn activate(control: Control, store: &FilterStore, users: &[User]) -> bool {
    let handled = match control {
        Control::AllUsers => {
            store.select_all_users();
            true
        }
        Control::User(id) => match users.iter().find(|u| u.id == id) {
            Some(user) => {
                store.select_user(&user.name);
                true
            }
            None => false,
        },
        Control::ClearButton => {
            store.clear_query();
            true
        }
        Control::ResetAll => {
            store.reset_filters();
            true
        }
        Control::SearchField => false,
    };

    if handled {
        sync_focus_ring(store, users);
    }
    handled
}

fn is_activation_key(event: &KeyboardEvent) -> bool {
    event.key == "Enter" || event.key == " "
}

/// Register all filter bindings. Returns a handle for cleanup.
pub fn setup_filter_keys(
    store: FilterStore,
    users: Rc<Vec<User>>,
    running: Arc<AtomicBool>,
) -> FilterKeysHandle {
    let mut cleanups: Vec<Box<dyn FnOnce()>> = Vec::new();
    sync_focus_ring(&store, &users);

    // Search field: text editing
    {
        let store = store.clone();
        let users = users.clone();
        cleanups.push(Box::new(keyboard::on_focused(Control::SearchField, move |event| {
            let mut query = store.query();
            if let Some(c) = event.printable_char() {
                query.push(c);
            } else if event.key == "Backspace" {
                if query.pop().is_none() {
                    return true;
                }
            } else {
                return false;
            }
            store.set_query(&query);
            sync_focus_ring(&store, &users);
            true
        })));
    }

    // Tabs and buttons: activation keys
    let mut activatable = vec![Control::AllUsers, Control::ClearButton, Control::ResetAll];
    activatable.extend(users.iter().map(|u| Control::User(u.id)));

    for control in activatable {
        let store = store.clone();
        let users = users.clone();
        cleanups.push(Box::new(keyboard::on_focused(control, move |event| {
            if is_activation_key(event) {
                return activate(control, &store, &users);
            }

            let is_tab = matches!(control, Control::AllUsers | Control::User(_));
            let step = match event.key.as_str() {
                "ArrowRight" if is_tab => 1,
                "ArrowLeft" if is_tab => -1,
                _ => return false,
            };
            let tabs: Vec<Control> = std::iter::once(Control::AllUsers)
                .chain(users.iter().map(|u| Control::User(u.id)))
                .collect();
            let Some(pos) = tabs.iter().position(|c| *c == control) else {
                return false;
            };
            let next = tabs[(pos as isize + step).rem_euclid(tabs.len() as isize) as usize];
            focus::focus(next);
            activate(next, &store, &users)
        })));
    }

    // Escape clears the query from anywhere
    {
        let store = store.clone();
        let users = users.clone();
        cleanups.push(Box::new(keyboard::on_key("Escape", move || {
            if store.query().is_empty() {
                return false;
            }
            store.clear_query();
            sync_focus_ring(&store, &users);
            true
        })));
    }

    // Ctrl+R reset, `/` search, `q` quit
    {
        let store = store.clone();
        let users = users.clone();
        cleanups.push(Box::new(keyboard::on(move |event| {
            if event.modifiers.ctrl && event.key == "r" {
                store.reset_filters();
                sync_focus_ring(&store, &users);
                return true;
            }
            match event.printable_char() {
                Some('/') => {
                    focus::focus(Control::SearchField);
                    true
                }
                Some('q') => {
                    debug!("quit requested");
                    running.store(false, Ordering::SeqCst);
                    true
                }
                _ => false,
            }
        })));
    }

    // Mouse: clicking focuses, then activates
    {
        let store = store.clone();
        let users = users.clone();
        cleanups.push(Box::new(mouse::on_click(move |control| {
            focus::focus(control);
            activate(control, &store, &users);
            true
        })));
    }

    FilterKeysHandle { cleanups }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Fixtures;
    use crate::state::global_keys::{route_keyboard_event, setup_global_keys};
    use crate::state::keyboard::{reset_keyboard_state, Modifiers};
    use crate::state::mouse::{fill_hit_rect, reset_mouse_state, resize_hit_grid, MouseButton, MouseEvent};
    use crate::state::focus::reset_focus_state;

    struct Harness {
        store: FilterStore,
        running: Arc<AtomicBool>,
        users: Rc<Vec<User>>,
    }

    fn setup() -> Harness {
        reset_keyboard_state();
        reset_focus_state();
        reset_mouse_state();

        let fixtures = Fixtures::embedded().unwrap();
        let store = FilterStore::new(fixtures.product_views());
        let users = Rc::new(fixtures.users().to_vec());
        let running = Arc::new(AtomicBool::new(true));

        // Handles are leaked on purpose; every test resets the registries.
        std::mem::forget(setup_global_keys(running.clone()));
        std::mem::forget(setup_filter_keys(store.clone(), users.clone(), running.clone()));

        Harness { store, running, users }
    }

    fn press(key: &str) {
        route_keyboard_event(KeyboardEvent::new(key));
    }

    fn type_text(text: &str) {
        for c in text.chars() {
            press(&c.to_string());
        }
    }

    #[test]
    fn test_typing_in_search_sets_query() {
        let h = setup();
        focus::focus(Control::SearchField);

        type_text("Ph");
        assert_eq!(h.store.query(), "Ph");
        assert_eq!(h.store.visible().len(), 1);

        press("Backspace");
        assert_eq!(h.store.query(), "P");
    }

    #[test]
    fn test_backspace_on_empty_query() {
        let h = setup();
        focus::focus(Control::SearchField);
        press("Backspace");
        assert_eq!(h.store.query(), "");
    }

    #[test]
    fn test_typing_outside_search_is_ignored() {
        let h = setup();
        focus::focus(Control::AllUsers);
        type_text("ab");
        assert_eq!(h.store.query(), "");
    }

    #[test]
    fn test_slash_focuses_search() {
        let h = setup();
        press("/");
        assert!(focus::is_focused(Control::SearchField));

        // Inside the field, `/` is just text.
        press("/");
        assert_eq!(h.store.query(), "/");
    }

    #[test]
    fn test_escape_clears_query() {
        let h = setup();
        h.store.set_query("milk");
        press("Escape");
        assert_eq!(h.store.query(), "");
    }

    #[test]
    fn test_enter_on_user_tab_selects_user() {
        let h = setup();
        let anna = h.users.iter().find(|u| u.name == "Anna").unwrap().id;

        focus::focus(Control::User(anna));
        press("Enter");
        assert_eq!(h.store.user_for_filter(), "Anna");

        // Selecting again keeps the filter.
        press(" ");
        assert_eq!(h.store.user_for_filter(), "Anna");

        focus::focus(Control::AllUsers);
        press("Enter");
        assert_eq!(h.store.user_for_filter(), "");
    }

    #[test]
    fn test_arrows_walk_tabs() {
        let h = setup();
        focus::focus(Control::AllUsers);

        press("ArrowRight");
        assert_eq!(h.store.user_for_filter(), h.users[0].name);

        press("ArrowLeft");
        assert_eq!(h.store.user_for_filter(), "");

        press("ArrowLeft");
        assert_eq!(h.store.user_for_filter(), h.users.last().unwrap().name);
    }

    #[test]
    fn test_clear_button_appears_and_returns_focus() {
        let h = setup();
        focus::focus(Control::SearchField);
        assert!(!focus::focus_ring().contains(&Control::ClearButton));

        type_text("x");
        assert!(focus::focus_ring().contains(&Control::ClearButton));

        press("Tab");
        assert!(focus::is_focused(Control::ClearButton));
        press("Enter");
        assert_eq!(h.store.query(), "");
        assert!(focus::is_focused(Control::SearchField));
    }

    #[test]
    fn test_ctrl_r_resets_everything() {
        let h = setup();
        h.store.select_user("Roma");
        h.store.set_query("ph");

        route_keyboard_event(KeyboardEvent::with_modifiers("r", Modifiers::ctrl()));
        assert_eq!(h.store.user_for_filter(), "");
        assert_eq!(h.store.query(), "");
    }

    #[test]
    fn test_reset_button() {
        let h = setup();
        h.store.select_user("Max");
        focus::focus(Control::ResetAll);
        press("Enter");
        assert_eq!(h.store.user_for_filter(), "");
    }

    #[test]
    fn test_q_quits_only_outside_search() {
        let h = setup();
        focus::focus(Control::SearchField);
        press("q");
        assert!(h.running.load(Ordering::SeqCst));

        focus::focus(Control::ResetAll);
        press("q");
        assert!(!h.running.load(Ordering::SeqCst));
    }

    #[test]
    fn test_click_selects_user() {
        let h = setup();
        let roma = h.users.iter().find(|u| u.name == "Roma").unwrap().id;
        resize_hit_grid(40, 10);
        fill_hit_rect(5, 2, 6, 1, Control::User(roma));

        assert!(mouse::dispatch(MouseEvent::down(MouseButton::Left, 6, 2)));
        assert_eq!(h.store.user_for_filter(), "Roma");
        assert!(focus::is_focused(Control::User(roma)));
    }
}
