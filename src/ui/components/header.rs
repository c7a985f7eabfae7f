//! Header component renderer.

use crate::ui::helpers::{display_width, Painter};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered title bar and the subtitle under it.
///
/// The title is bold in the theme's header colors. When the theme has a
/// header background the line is padded to the full width so the bar is solid.
pub fn render_header(painter: &mut Painter, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let title_len = display_width(&header.title);
    let padding = cols.saturating_sub(title_len) / 2;

    painter.bold();
    painter.fg(&theme.colors.header_fg);
    if let Some(bg) = &theme.colors.header_bg {
        painter.bg(bg);
    }
    painter.spaces(padding);
    painter.text(&header.title);
    if theme.colors.header_bg.is_some() {
        painter.spaces(cols.saturating_sub(padding + title_len));
    }
    painter.reset();
    painter.newline();

    if !header.subtitle.is_empty() {
        painter.dim();
        painter.fg(&theme.colors.text_dim);
        painter.centered(&header.subtitle, cols);
        painter.reset();
        painter.newline();
    }
}
