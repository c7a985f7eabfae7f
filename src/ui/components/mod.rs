//! Composable UI component renderers.
//!
//! Each component appends its lines to a shared [`Painter`]; the layout is a
//! plain top-to-bottom stack.
//!
//! # Components
//!
//! - [`header`]: Centered title and subtitle
//! - [`summary`]: Chip row, stat cards, alert banner
//! - [`search`]: Search input box
//! - [`table`]: One block per visible record
//! - [`empty`]: Message shown when nothing is visible
//! - [`footer`]: Visible/total counts

mod empty;
mod footer;
mod header;
mod search;
mod summary;
mod table;

use crate::ui::helpers::Painter;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ScreenViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use summary::{render_banner, render_chips, render_stats};
use table::render_rows;

/// Renders a horizontal border line.
fn render_border(painter: &mut Painter, color: &str, cols: usize) {
    painter.fg(color);
    painter.text(&"─".repeat(cols));
    painter.reset();
    painter.newline();
}

/// Renders a full screen.
///
/// ```text
/// [Header + subtitle]
/// [Border]
/// [Chips]
/// [Search Bar - 3 lines]     (screens with search)
/// [Stats]
/// [Banner]                   (when present)
/// [Rows | Empty state]
/// [Border]
/// [Footer]
/// ```
pub fn render_screen(painter: &mut Painter, vm: &ScreenViewModel, theme: &Theme, cols: usize) {
    render_header(painter, &vm.header, theme, cols);
    render_border(painter, &theme.colors.border, cols);
    render_chips(painter, &vm.chips, theme);
    if let Some(search) = &vm.search_bar {
        render_search_bar(painter, search, theme, cols);
    }
    render_stats(painter, &vm.stats, theme);
    if let Some(banner) = &vm.banner {
        render_banner(painter, banner, theme);
    }
    render_border(painter, &theme.colors.border, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(painter, empty, theme, cols);
    } else {
        let query = vm.search_bar.as_ref().map_or("", |search| search.query.as_str());
        render_rows(painter, &vm.rows, query, theme, cols);
    }

    render_border(painter, &theme.colors.border, cols);
    render_footer(painter, &vm.footer, theme, cols);
}
