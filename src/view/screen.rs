//! Screen composition.
//!
//! Turns the visible collection and the filter state into a [`FrameBuffer`],
//! plus the hook regions and click targets for that frame. Pure: the same
//! context always composes the same frame.
//!
//! ```text
//!  Product Categories
//!
//!  Filters
//!   All   Roma   Anna   Max   John
//!  [ph                      ] [x]
//!   All   🍞 Grocery   🍺 Drinks   ...
//!   Reset all filters
//!
//!  ID ⇅   Product ▾           Category ▴              User ⇅
//!  ──────────────────────────────────────────────────────────────────
//!  3      iPhone              💻 - Electronics        Roma
//! ```

use crate::catalog::{Category, FilterState, ProductView, User};
use crate::renderer::{string_width, truncate_to_width, FrameBuffer};
use crate::theme::Theme;
use crate::types::{Attr, Style};

use super::control::Control;
use super::hooks::{HookRegion, TestHook};
use super::rows::ProductRow;

// =============================================================================
// LAYOUT
// =============================================================================

const PAD: u16 = 1;

const TITLE: &str = "Product Categories";
const FILTERS_HEADING: &str = "Filters";
const ALL_LABEL: &str = "All";
const SEARCH_PLACEHOLDER: &str = "Search";
const CLEAR_LABEL: &str = "[x]";
const RESET_LABEL: &str = "Reset all filters";
pub const NO_MATCHING_MESSAGE: &str = "No products matching selected criteria";
const FOOTER: &str = "Tab/Shift+Tab move · Enter select · / search · Esc clear · Ctrl+R reset · q quit";

const ROW_TITLE: u16 = 0;
const ROW_HEADING: u16 = 2;
const ROW_TABS: u16 = 3;
const ROW_SEARCH: u16 = 4;
const ROW_CATEGORIES: u16 = 5;
const ROW_RESET: u16 = 6;
const ROW_TABLE: u16 = 8;

const SEARCH_WIDTH: u16 = 24;

/// Table columns: label, width, sort glyph.
const COLUMNS: [(&str, u16, &str); 4] = [
    ("ID", 7, "⇅"),
    ("Product", 20, "▾"),
    ("Category", 24, "▴"),
    ("User", 16, "⇅"),
];

fn table_width() -> u16 {
    COLUMNS.iter().map(|(_, w, _)| *w).sum()
}

// =============================================================================
// TYPES
// =============================================================================

/// Everything one frame depends on.
pub struct ScreenContext<'a> {
    pub users: &'a [User],
    pub categories: &'a [Category],
    pub visible: &'a [ProductView],
    pub state: &'a FilterState,
    pub focused: Option<Control>,
    pub theme: &'a Theme,
    pub width: u16,
    pub height: u16,
}

/// Clickable rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub control: Control,
}

/// A composed frame.
#[derive(Debug, Clone)]
pub struct ScreenFrame {
    pub buffer: FrameBuffer,
    pub regions: Vec<HookRegion>,
    pub hits: Vec<HitRect>,
}

impl ScreenFrame {
    /// Plain text, one line per row.
    pub fn to_text(&self) -> String {
        self.buffer.to_text()
    }

    pub fn regions_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.regions)
    }
}

// =============================================================================
// COMPOSER
// =============================================================================

struct Composer<'a> {
    buffer: FrameBuffer,
    regions: Vec<HookRegion>,
    hits: Vec<HitRect>,
    theme: &'a Theme,
    focused: Option<Control>,
}

impl<'a> Composer<'a> {
    fn text(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        self.buffer.draw_text(x, y, text, style)
    }

    fn hook(&mut self, hook: TestHook, x: u16, y: u16, width: u16, text: &str) {
        self.regions.push(HookRegion::new(hook, x, y, width, text));
    }

    fn hit(&mut self, control: Control, x: u16, y: u16, width: u16) {
        self.hits.push(HitRect { x, y, width, height: 1, control });
    }

    /// Padded button label. Inverse when focused. Returns columns used.
    fn button(&mut self, x: u16, y: u16, label: &str, style: Style, control: Option<Control>) -> u16 {
        let style = match control {
            Some(c) if self.focused == Some(c) => style.with_attrs(style.attrs | Attr::INVERSE),
            _ => style,
        };
        let used = self.text(x, y, &format!(" {label} "), style);
        if let Some(c) = control {
            self.hit(c, x, y, used);
        }
        used
    }

    fn finish(self) -> ScreenFrame {
        ScreenFrame {
            buffer: self.buffer,
            regions: self.regions,
            hits: self.hits,
        }
    }
}

/// Compose one frame.
pub fn compose(ctx: &ScreenContext) -> ScreenFrame {
    let mut c = Composer {
        buffer: FrameBuffer::with_background(ctx.width, ctx.height, ctx.theme.bg()),
        regions: Vec::new(),
        hits: Vec::new(),
        theme: ctx.theme,
        focused: ctx.focused,
    };

    draw_headings(&mut c);
    draw_tabs(&mut c, ctx.users, ctx.state);
    draw_search(&mut c, ctx.state);
    draw_categories(&mut c, ctx.categories);
    draw_reset(&mut c);

    if ctx.visible.is_empty() {
        draw_no_matching(&mut c);
    } else {
        draw_table(&mut c, ctx.visible, ctx.height);
    }

    draw_footer(&mut c, ctx.height);
    c.finish()
}

// =============================================================================
// SECTIONS
// =============================================================================

fn draw_headings(c: &mut Composer) {
    let title = Style::fg(c.theme.primary()).with_attrs(Attr::BOLD);
    c.text(PAD, ROW_TITLE, TITLE, title);

    let heading = Style::fg(c.theme.text()).with_attrs(Attr::BOLD);
    c.text(PAD, ROW_HEADING, FILTERS_HEADING, heading);
}

fn draw_tabs(c: &mut Composer, users: &[User], state: &FilterState) {
    let active = Style::fg(c.theme.primary()).with_attrs(Attr::BOLD | Attr::UNDERLINE);
    let inactive = Style::fg(c.theme.text());

    let mut x = PAD;
    let style = if state.has_user_filter() { inactive } else { active };
    let used = c.button(x, ROW_TABS, ALL_LABEL, style, Some(Control::AllUsers));
    c.hook(TestHook::FilterAllUsers, x + 1, ROW_TABS, used.saturating_sub(2), ALL_LABEL);
    x += used + 1;

    for user in users {
        let style = if state.is_user_selected(&user.name) { active } else { inactive };
        let used = c.button(x, ROW_TABS, &user.name, style, Some(Control::User(user.id)));
        c.hook(TestHook::FilterUser, x + 1, ROW_TABS, used.saturating_sub(2), &user.name);
        x += used + 1;
    }
}

fn draw_search(c: &mut Composer, state: &FilterState) {
    let x = PAD;
    let inner = SEARCH_WIDTH as usize;

    let (content, fg) = if state.has_query() {
        (tail_to_width(&state.query, inner), c.theme.text())
    } else {
        (SEARCH_PLACEHOLDER.to_string(), c.theme.text_muted())
    };
    let pad = inner.saturating_sub(string_width(&content));
    let field = format!("[{content}{}]", " ".repeat(pad));

    let mut style = Style::fg(fg);
    if c.focused == Some(Control::SearchField) {
        style = style.with_attrs(Attr::INVERSE);
    }
    let used = c.text(x, ROW_SEARCH, &field, style);
    c.hit(Control::SearchField, x, ROW_SEARCH, used);
    c.hook(TestHook::SearchField, x, ROW_SEARCH, used, &state.query);

    if state.has_query() {
        let bx = x + used + 1;
        let mut style = Style::fg(c.theme.danger());
        if c.focused == Some(Control::ClearButton) {
            style = style.with_attrs(Attr::INVERSE);
        }
        let used = c.text(bx, ROW_SEARCH, CLEAR_LABEL, style);
        c.hit(Control::ClearButton, bx, ROW_SEARCH, used);
        c.hook(TestHook::ClearButton, bx, ROW_SEARCH, used, CLEAR_LABEL);
    }
}

/// Keep the end of the query visible while typing past the field width.
fn tail_to_width(s: &str, max: usize) -> String {
    if string_width(s) <= max {
        return s.to_string();
    }
    let mut tail: Vec<char> = Vec::new();
    let mut used = 0;
    for ch in s.chars().rev() {
        let w = crate::renderer::char_width(ch);
        if used + w > max {
            break;
        }
        tail.push(ch);
        used += w;
    }
    tail.iter().rev().collect()
}

fn draw_categories(c: &mut Composer, categories: &[Category]) {
    let muted = Style::fg(c.theme.text_muted());

    let mut x = PAD;
    let used = c.button(x, ROW_CATEGORIES, ALL_LABEL, muted, None);
    c.hook(TestHook::AllCategories, x + 1, ROW_CATEGORIES, used.saturating_sub(2), ALL_LABEL);
    x += used + 1;

    for category in categories {
        let label = format!("{} {}", category.icon, category.title);
        let used = c.button(x, ROW_CATEGORIES, &label, muted, None);
        c.hook(TestHook::Category, x + 1, ROW_CATEGORIES, used.saturating_sub(2), &label);
        x += used + 1;
    }
}

fn draw_reset(c: &mut Composer) {
    let style = Style::fg(c.theme.success());
    let used = c.button(PAD, ROW_RESET, RESET_LABEL, style, Some(Control::ResetAll));
    c.hook(TestHook::ResetAllButton, PAD + 1, ROW_RESET, used.saturating_sub(2), RESET_LABEL);
}

fn draw_no_matching(c: &mut Composer) {
    let style = Style::fg(c.theme.text_muted()).with_attrs(Attr::ITALIC);
    let used = c.text(PAD, ROW_TABLE, NO_MATCHING_MESSAGE, style);
    c.hook(TestHook::NoMatchingMessage, PAD, ROW_TABLE, used, NO_MATCHING_MESSAGE);
}

fn draw_table(c: &mut Composer, visible: &[ProductView], height: u16) {
    let width = table_width();

    // Header
    let header = Style::fg(c.theme.text()).with_attrs(Attr::BOLD);
    let glyph = Style::fg(c.theme.text_muted());
    let mut x = PAD;
    for (label, col_width, sort) in COLUMNS {
        let used = c.text(x, ROW_TABLE, label, header);
        let gx = x + used + 1;
        let g = c.text(gx, ROW_TABLE, sort, glyph);
        c.hook(TestHook::SortIcon, gx, ROW_TABLE, g, sort);
        x += col_width;
    }
    let rule = Style::fg(c.theme.border());
    c.buffer.draw_hline(PAD, ROW_TABLE + 1, width, '─', rule);

    // Rows stop above the footer
    let first_row = ROW_TABLE + 2;
    let last_row = height.saturating_sub(2);
    let capacity = last_row.saturating_sub(first_row) as usize;
    let (shown, hidden) = if visible.len() > capacity {
        (capacity.saturating_sub(1), visible.len() - capacity.saturating_sub(1))
    } else {
        (visible.len(), 0)
    };

    let mut y = first_row;
    for (i, view) in visible.iter().take(shown).enumerate() {
        if i % 2 == 1 && !c.theme.bg_muted().is_terminal_default() {
            c.buffer.fill_rect(PAD, y, width, 1, c.theme.bg_muted());
        }
        draw_row(c, &ProductRow::from_view(view), y);
        y += 1;
    }

    if hidden > 0 {
        let more = format!("… {hidden} more");
        let style = Style::fg(c.theme.text_muted());
        c.text(PAD, y, &more, style);
        y += 1;
    }

    c.regions.push(HookRegion {
        height: y - ROW_TABLE,
        ..HookRegion::new(TestHook::ProductTable, PAD, ROW_TABLE, width, "")
    });
}

fn draw_row(c: &mut Composer, row: &ProductRow, y: u16) {
    c.hook(TestHook::Product, PAD, y, table_width(), "");

    let user_fg = match row.user_tone {
        Some(tone) => tone.color(c.theme),
        None => c.theme.text(),
    };
    let cells = [
        (TestHook::ProductId, row.id.as_str(), c.theme.text_muted()),
        (TestHook::ProductName, row.name.as_str(), c.theme.text()),
        (TestHook::ProductCategory, row.category.as_str(), c.theme.text()),
        (TestHook::ProductUser, row.user.as_str(), user_fg),
    ];

    let mut x = PAD;
    for ((hook, text, fg), (_, col_width, _)) in cells.into_iter().zip(COLUMNS) {
        let text = truncate_to_width(text, col_width.saturating_sub(1) as usize);
        let mut style = Style::fg(fg);
        if hook == TestHook::ProductUser {
            style = style.with_attrs(Attr::BOLD);
        }
        let used = c.text(x, y, &text, style);
        c.hook(hook, x, y, used, &text);
        x += col_width;
    }
}

fn draw_footer(c: &mut Composer, height: u16) {
    if height <= ROW_TABLE + 1 {
        return;
    }
    let style = Style::fg(c.theme.text_muted()).with_attrs(Attr::DIM);
    c.text(PAD, height - 1, FOOTER, style);
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{visible_products, Fixtures};
    use crate::view::hooks::HookQuery;

    struct Setup {
        fixtures: Fixtures,
        views: Vec<ProductView>,
        theme: Theme,
    }

    fn setup() -> Setup {
        let fixtures = Fixtures::embedded().unwrap();
        let views = fixtures.product_views();
        Setup { fixtures, views, theme: crate::theme::terminal() }
    }

    fn compose_with(s: &Setup, state: &FilterState, focused: Option<Control>, height: u16) -> ScreenFrame {
        let visible: Vec<ProductView> =
            visible_products(&s.views, state).into_iter().cloned().collect();
        compose(&ScreenContext {
            users: s.fixtures.users(),
            categories: s.fixtures.categories(),
            visible: &visible,
            state,
            focused,
            theme: &s.theme,
            width: 100,
            height,
        })
    }

    #[test]
    fn test_initial_screen_hooks() {
        let s = setup();
        let frame = compose_with(&s, &FilterState::default(), None, 30);
        let regions = frame.regions.as_slice();

        assert!(regions.has_hook(TestHook::ProductTable));
        assert!(regions.has_hook(TestHook::FilterAllUsers));
        assert!(regions.has_hook(TestHook::SearchField));
        assert!(regions.has_hook(TestHook::ResetAllButton));
        assert!(regions.has_hook(TestHook::AllCategories));
        assert!(!regions.has_hook(TestHook::ClearButton));
        assert!(!regions.has_hook(TestHook::NoMatchingMessage));

        assert_eq!(regions.hooks(TestHook::Product).len(), s.views.len());
        assert_eq!(regions.hooks(TestHook::FilterUser).len(), s.fixtures.users().len());
        assert_eq!(regions.hooks(TestHook::Category).len(), s.fixtures.categories().len());
        assert_eq!(regions.hooks(TestHook::SortIcon).len(), 4);
    }

    #[test]
    fn test_query_shows_clear_button() {
        let s = setup();
        let mut state = FilterState::default();
        state.set_query("ph");
        let frame = compose_with(&s, &state, None, 30);
        let regions = frame.regions.as_slice();

        assert_eq!(regions.find_hook(TestHook::SearchField).unwrap().text, "ph");
        assert!(regions.has_hook(TestHook::ClearButton));
        assert!(frame.hits.iter().any(|h| h.control == Control::ClearButton));

        let name_hooks = regions.hooks(TestHook::ProductName);
        let names: Vec<&str> = name_hooks.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(names, vec!["iPhone"]);
    }

    #[test]
    fn test_no_matches_replaces_table() {
        let s = setup();
        let mut state = FilterState::default();
        state.set_query("XYZ");
        let frame = compose_with(&s, &state, None, 30);
        let regions = frame.regions.as_slice();

        assert!(regions.has_hook(TestHook::NoMatchingMessage));
        assert!(!regions.has_hook(TestHook::ProductTable));
        assert!(!regions.has_hook(TestHook::Product));
        assert!(frame.to_text().contains(NO_MATCHING_MESSAGE));
    }

    #[test]
    fn test_category_cell_text() {
        let s = setup();
        let frame = compose_with(&s, &FilterState::default(), None, 30);
        let regions = frame.regions.as_slice();

        let category_hooks = regions.hooks(TestHook::ProductCategory);
        let first_category = &category_hooks[0].text;
        let milk = &s.views[0];
        let expected = match &milk.category {
            Some(c) => format!("{} - {}", c.icon, c.title),
            None => "No category".to_string(),
        };
        assert_eq!(first_category, &expected);
    }

    #[test]
    fn test_active_tab_styled() {
        let s = setup();
        let mut state = FilterState::default();
        state.select_user("Anna");
        let frame = compose_with(&s, &state, None, 30);

        let anna = frame
            .regions
            .iter()
            .find(|r| r.hook == TestHook::FilterUser && r.text == "Anna")
            .unwrap();
        let cell = frame.buffer.get(anna.x, anna.y).unwrap();
        assert!(cell.attrs.contains(Attr::BOLD));

        let all = frame.regions.as_slice().find_hook(TestHook::FilterAllUsers).unwrap();
        let cell = frame.buffer.get(all.x, all.y).unwrap();
        assert!(!cell.attrs.contains(Attr::BOLD));
    }

    #[test]
    fn test_focused_control_inverse() {
        let s = setup();
        let frame = compose_with(&s, &FilterState::default(), Some(Control::ResetAll), 30);
        let reset = frame.regions.as_slice().find_hook(TestHook::ResetAllButton).unwrap();
        let cell = frame.buffer.get(reset.x, reset.y).unwrap();
        assert!(cell.attrs.contains(Attr::INVERSE));
    }

    #[test]
    fn test_hits_cover_tabs() {
        let s = setup();
        let frame = compose_with(&s, &FilterState::default(), None, 30);
        let tab_hits = frame
            .hits
            .iter()
            .filter(|h| matches!(h.control, Control::AllUsers | Control::User(_)))
            .count();
        assert_eq!(tab_hits, s.fixtures.users().len() + 1);
    }

    #[test]
    fn test_short_screen_truncates_rows() {
        let s = setup();
        // Rows 10..13 fit three lines: two products and the overflow marker
        let frame = compose_with(&s, &FilterState::default(), None, 15);
        let regions = frame.regions.as_slice();
        assert_eq!(regions.hooks(TestHook::Product).len(), 2);
        assert!(frame.to_text().contains("… 4 more"));
    }

    #[test]
    fn test_long_query_keeps_tail() {
        assert_eq!(tail_to_width("abcdef", 3), "def");
        assert_eq!(tail_to_width("ab", 3), "ab");
    }
}
