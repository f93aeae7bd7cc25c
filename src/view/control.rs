//! Interactive controls on the screen.
//!
//! Every control that can take focus or receive a click. Tab order follows
//! [`focus_order`].

use crate::catalog::{FilterState, Id, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// The "All" user tab.
    AllUsers,
    /// One tab per user, keyed by user id.
    User(Id),
    SearchField,
    /// Only present while the query is non-empty.
    ClearButton,
    ResetAll,
}

/// Focusable controls in tab order for the given users and state.
pub fn focus_order(users: &[User], state: &FilterState) -> Vec<Control> {
    let mut controls = Vec::with_capacity(users.len() + 4);
    controls.push(Control::AllUsers);
    controls.extend(users.iter().map(|u| Control::User(u.id)));
    controls.push(Control::SearchField);
    if state.has_query() {
        controls.push(Control::ClearButton);
    }
    controls.push(Control::ResetAll);
    controls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Sex;

    fn users() -> Vec<User> {
        vec![
            User { id: 1, name: "Roma".to_string(), sex: Sex::Male },
            User { id: 2, name: "Anna".to_string(), sex: Sex::Female },
        ]
    }

    #[test]
    fn test_focus_order_without_query() {
        let order = focus_order(&users(), &FilterState::default());
        assert_eq!(
            order,
            vec![
                Control::AllUsers,
                Control::User(1),
                Control::User(2),
                Control::SearchField,
                Control::ResetAll,
            ]
        );
    }

    #[test]
    fn test_clear_button_follows_search() {
        let mut state = FilterState::default();
        state.set_query("m");
        let order = focus_order(&users(), &state);
        let search = order.iter().position(|c| *c == Control::SearchField).unwrap();
        assert_eq!(order[search + 1], Control::ClearButton);
    }
}
