//! Chip row, stat cards and the alert banner.

use crate::ui::helpers::Painter;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{AlertBanner, ChipInfo, StatCard};

/// Renders the chips on one line, separated by two spaces.
///
/// The selected chip uses the selection colors; in plain output it is
/// wrapped in brackets instead.
pub fn render_chips(painter: &mut Painter, chips: &[ChipInfo], theme: &Theme) {
    if chips.is_empty() {
        return;
    }

    painter.spaces(1);
    for (i, chip) in chips.iter().enumerate() {
        if i > 0 {
            painter.spaces(2);
        }
        if chip.is_selected {
            painter.bold();
            painter.fg(&theme.colors.selection_fg);
            painter.bg(&theme.colors.selection_bg);
            if painter.is_plain() {
                painter.text(&format!("[{}]", chip.label));
            } else {
                painter.text(&format!(" {} ", chip.label));
            }
        } else {
            painter.fg(&chip.color);
            painter.text(&format!(" {} ", chip.label));
        }
        painter.reset();
    }
    painter.newline();
}

/// Renders the stat cards as `Label: value (caption)` cells on one line.
pub fn render_stats(painter: &mut Painter, stats: &[StatCard], theme: &Theme) {
    if stats.is_empty() {
        return;
    }

    painter.spaces(1);
    for (i, card) in stats.iter().enumerate() {
        if i > 0 {
            painter.fg(&theme.colors.border);
            painter.text(" | ");
            painter.reset();
        }
        painter.fg(&theme.colors.text_dim);
        painter.text(&format!("{}: ", card.label));
        painter.bold();
        painter.fg(&card.color);
        painter.text(&card.value);
        painter.reset();
        if let Some(caption) = &card.caption {
            painter.dim();
            painter.text(&format!(" ({caption})"));
            painter.reset();
        }
    }
    painter.newline();
}

/// Renders the warning banner: bold title, one line per entry, then the overflow note.
pub fn render_banner(painter: &mut Painter, banner: &AlertBanner, theme: &Theme) {
    painter.bold();
    painter.fg(&theme.colors.alert_fg);
    painter.text(&format!(" ! {}", banner.title));
    painter.reset();
    painter.newline();

    for line in &banner.lines {
        painter.fg(&banner.color);
        painter.text(&format!("   {line}"));
        painter.reset();
        painter.newline();
    }

    if let Some(overflow) = &banner.overflow {
        painter.dim();
        painter.fg(&theme.colors.text_dim);
        painter.text(&format!("   {overflow}"));
        painter.reset();
        painter.newline();
    }
}
