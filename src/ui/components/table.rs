//! Row list renderer.
//!
//! Each [`DisplayRow`] takes one main line plus one line per detail:
//!
//! ```text
//!  Garam Masala [Spices]                                   ₹450.00/kg
//!    Spices | 15 kg    Min: 5 kg
//!    - detail line
//! ```
//!
//! Query matches in the title are highlighted. Muted rows are drawn dim.

use crate::ui::helpers::{display_width, match_ranges, render_highlighted_text, truncate, Painter};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayRow;

/// Columns reserved between the title block and the trailing figure.
const TRAILING_GAP: usize = 2;

/// Renders every row; `query` is the active search text used for highlighting.
pub fn render_rows(painter: &mut Painter, rows: &[DisplayRow], query: &str, theme: &Theme, cols: usize) {
    for row in rows {
        render_row(painter, row, query, theme, cols);
    }
}

fn row_style(muted: bool, theme: &Theme) -> impl Fn(&mut Painter) + '_ {
    move |painter: &mut Painter| {
        if muted {
            painter.dim();
            painter.fg(&theme.colors.text_dim);
        } else {
            painter.fg(&theme.colors.text_normal);
        }
    }
}

fn render_row(painter: &mut Painter, row: &DisplayRow, query: &str, theme: &Theme, cols: usize) {
    let restore = row_style(row.is_muted, theme);
    let badge_text = row
        .badge
        .as_ref()
        .map(|badge| format!(" [{}]", badge.label))
        .unwrap_or_default();

    let trailing_len = display_width(&row.trailing);
    let title_room = cols
        .saturating_sub(1 + trailing_len + TRAILING_GAP)
        .saturating_sub(display_width(&badge_text));
    let title = truncate(&row.title, title_room);

    painter.spaces(1);
    restore(painter);
    let ranges = match_ranges(&title, query);
    render_highlighted_text(painter, &title, &ranges, theme, &restore);
    painter.reset();

    if let Some(badge) = &row.badge {
        painter.fg(&badge.color);
        painter.text(&badge_text);
        painter.reset();
    }

    let used = 1 + display_width(&title) + display_width(&badge_text);
    painter.spaces(cols.saturating_sub(used + trailing_len).max(TRAILING_GAP));
    painter.bold();
    restore(painter);
    painter.text(&row.trailing);
    painter.reset();
    painter.newline();

    let mut second_line = row.subtitle.clone();
    for tag in &row.tags {
        if !second_line.is_empty() {
            second_line.push_str("    ");
        }
        second_line.push_str(tag);
    }
    if !second_line.is_empty() {
        painter.dim();
        painter.fg(&theme.colors.text_dim);
        painter.text(&format!("   {}", truncate(&second_line, cols.saturating_sub(3))));
        painter.reset();
        painter.newline();
    }

    for detail in &row.details {
        restore(painter);
        painter.text(&format!("   - {}", truncate(detail, cols.saturating_sub(5))));
        painter.reset();
        painter.newline();
    }
}
