//! Search bar component renderer.

use crate::ui::helpers::{display_width, truncate, Painter};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box.
///
/// ```text
/// [margin] ┌─────────────────────┐
/// [margin] │ Search: masala      │
/// [margin] └─────────────────────┘
/// ```
///
/// The placeholder is shown dimmed while the query is empty.
pub fn render_search_bar(painter: &mut Painter, search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    painter.spaces(SEARCH_BOX_MARGIN);
    painter.fg(&theme.colors.search_bar_border);
    painter.text(&format!("┌{}┐", "─".repeat(inner_width)));
    painter.reset();
    painter.newline();

    let showing_placeholder = search.query.is_empty();
    let content = if showing_placeholder {
        &search.placeholder
    } else {
        &search.query
    };
    let search_text = truncate(&format!(" Search: {content}"), inner_width);
    let padding = inner_width.saturating_sub(display_width(&search_text));

    painter.spaces(SEARCH_BOX_MARGIN);
    painter.fg(&theme.colors.search_bar_border);
    painter.text("│");
    if showing_placeholder {
        painter.dim();
        painter.fg(&theme.colors.text_dim);
    } else {
        painter.fg(&theme.colors.text_normal);
    }
    painter.text(&search_text);
    painter.reset();
    painter.spaces(padding);
    painter.fg(&theme.colors.search_bar_border);
    painter.text("│");
    painter.reset();
    painter.newline();

    painter.spaces(SEARCH_BOX_MARGIN);
    painter.fg(&theme.colors.search_bar_border);
    painter.text(&format!("└{}┘", "─".repeat(inner_width)));
    painter.reset();
    painter.newline();
}
