//! Footer component renderer.

use crate::ui::helpers::{truncate, Painter};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer line centered and dimmed, truncated to the width.
pub fn render_footer(painter: &mut Painter, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let text = truncate(&footer.text, cols);

    painter.fg(&theme.colors.text_dim);
    painter.centered(&text, cols);
    painter.reset();
    painter.newline();
}
