//! Empty state component renderer.

use crate::ui::helpers::Painter;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Blank lines above the empty state message.
const EMPTY_STATE_MARGIN: usize = 2;

/// Renders the centered two-line empty state message.
///
/// ```text
/// [blank lines]
///            No items found
///     Try another category or search term
/// ```
pub fn render_empty_state(painter: &mut Painter, empty: &EmptyState, theme: &Theme, cols: usize) {
    for _ in 0..EMPTY_STATE_MARGIN {
        painter.newline();
    }

    painter.fg(&theme.colors.empty_state_fg);
    painter.centered(&empty.message, cols);
    painter.reset();
    painter.newline();

    painter.dim();
    painter.fg(&theme.colors.text_dim);
    painter.centered(&empty.subtitle, cols);
    painter.reset();
    painter.newline();
    painter.newline();
}
