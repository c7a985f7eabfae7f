//! Top-level rendering coordinator.
//!
//! Turns a [`ScreenViewModel`] into a block of text, either ANSI-styled or
//! plain. Rendering never fails and never writes to stdout itself; callers
//! decide where the text goes.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use dishboard::app::{ActiveScreen, Screen};
//! use dishboard::fixtures::Builtin;
//! use dishboard::ui::{render_screen, RenderOptions, Theme};
//!
//! let screen = ActiveScreen::enter(Screen::Staff, &Builtin, Utc::now(), "₹");
//! let text = render_screen(&screen, &Theme::default(), &RenderOptions::plain(80));
//! assert!(text.contains("Showing 5 of 5 staff"));
//! ```

use crate::app::ActiveScreen;
use crate::ui::components;
use crate::ui::helpers::Painter;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ScreenViewModel;

/// Width used when none is configured.
pub const DEFAULT_WIDTH: usize = 80;

/// Narrowest layout the components handle without overlapping.
const MIN_WIDTH: usize = 40;

/// Output settings for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Terminal width in columns.
    pub width: usize,
    /// Skip ANSI escape sequences.
    pub plain: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            plain: false,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub const fn plain(width: usize) -> Self {
        Self { width, plain: true }
    }
}

/// Renders a view model to text.
#[must_use]
pub fn render(vm: &ScreenViewModel, theme: &Theme, options: &RenderOptions) -> String {
    let _span = tracing::debug_span!("render",
        title = %vm.header.title,
        rows = vm.rows.len(),
        plain = options.plain
    )
    .entered();

    let mut painter = Painter::new(options.plain);
    components::render_screen(&mut painter, vm, theme, options.width.max(MIN_WIDTH));
    painter.finish()
}

/// Computes the screen's view model and renders it.
#[must_use]
pub fn render_screen(screen: &ActiveScreen, theme: &Theme, options: &RenderOptions) -> String {
    render(&screen.compute_viewmodel(), theme, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{InventoryScreen, OrdersScreen, ReportsScreen, TablesScreen};
    use crate::fixtures;
    use chrono::Utc;

    #[test]
    fn plain_output_has_no_escapes() {
        let vm = InventoryScreen::new(fixtures::inventory()).compute_viewmodel();
        let text = render(&vm, &Theme::default(), &RenderOptions::plain(80));

        assert!(!text.contains('\u{1b}'));
        assert!(text.contains("Inventory"));
        assert!(text.contains("[All]"));
        assert!(text.contains("Garam Masala"));
        assert!(text.contains("Showing 10 of 10 items"));
    }

    #[test]
    fn styled_output_uses_theme_colors() {
        let theme = Theme::default();
        let vm = TablesScreen::new(fixtures::tables()).compute_viewmodel();
        let text = render(&vm, &theme, &RenderOptions::default());

        assert!(text.contains(&Theme::fg(&theme.colors.border)));
        assert!(text.contains(Theme::reset()));
        assert!(text.contains("Table 1"));
    }

    #[test]
    fn empty_screen_shows_message_instead_of_rows() {
        let now = Utc::now();
        let mut screen = OrdersScreen::new(fixtures::orders_at(now.timestamp_millis()), now.timestamp_millis());
        screen.set_search_query("no such order");
        let text = render(&screen.compute_viewmodel(), &Theme::default(), &RenderOptions::plain(80));

        assert!(text.contains("No new orders"));
        assert!(!text.contains("Order #"));
    }

    #[test]
    fn search_box_shows_placeholder_then_query() {
        let theme = Theme::default();
        let mut screen = TablesScreen::new(fixtures::tables());
        let before = render(&screen.compute_viewmodel(), &theme, &RenderOptions::plain(80));
        assert!(before.contains("Search: Search by table or guest..."));

        screen.set_search_query("priya");
        let after = render(&screen.compute_viewmodel(), &theme, &RenderOptions::plain(80));
        assert!(after.contains("│ Search: priya"));
    }

    #[test]
    fn narrow_width_is_clamped() {
        let vm = ReportsScreen::new(fixtures::orders_at(0), Utc::now()).compute_viewmodel();
        let text = render(&vm, &Theme::default(), &RenderOptions::plain(5));
        let border = "─".repeat(MIN_WIDTH);
        assert!(text.lines().any(|line| line == border));
    }
}
