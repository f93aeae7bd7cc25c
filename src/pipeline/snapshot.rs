//! Screen sources and one-shot rendering.
//!
//! [`ScreenSource`] bundles what every frame reads. The render effect composes
//! from it on each change; [`snapshot`] composes once for `--snapshot` and
//! `--hooks`.

use std::rc::Rc;

use tracing::trace;

use crate::catalog::{Category, Fixtures, ProductView, User};
use crate::state::FilterStore;
use crate::theme::Theme;
use crate::view::{compose, Control, ScreenContext, ScreenFrame};

/// Inputs shared by every frame. Cloning shares the store.
#[derive(Clone)]
pub struct ScreenSource {
    pub store: FilterStore,
    pub users: Rc<Vec<User>>,
    pub categories: Rc<Vec<Category>>,
    pub theme: Rc<Theme>,
}

impl ScreenSource {
    pub fn new(fixtures: &Fixtures, store: FilterStore, theme: Theme) -> Self {
        Self {
            store,
            users: Rc::new(fixtures.users().to_vec()),
            categories: Rc::new(fixtures.categories().to_vec()),
            theme: Rc::new(theme),
        }
    }

    /// Compose a frame for an already computed visible collection.
    pub fn compose(&self, visible: &[ProductView], focused: Option<Control>, size: (u16, u16)) -> ScreenFrame {
        let state = self.store.state();
        trace!(visible = visible.len(), width = size.0, height = size.1, "compose");
        compose(&ScreenContext {
            users: &self.users,
            categories: &self.categories,
            visible,
            state: &state,
            focused,
            theme: &self.theme,
            width: size.0,
            height: size.1,
        })
    }
}

/// Compose the current state once, with nothing focused.
pub fn snapshot(source: &ScreenSource, width: u16, height: u16) -> ScreenFrame {
    let visible = source.store.visible();
    source.compose(&visible, None, (width, height))
}
