//! Shared rendering utilities.
//!
//! [`Painter`] accumulates rendered text and drops every escape sequence in
//! plain mode, so components style unconditionally and the same code path
//! produces both colored and plain output.
//!
//! # Example
//!
//! ```
//! use dishboard::ui::helpers::Painter;
//!
//! let mut painter = Painter::new(true);
//! painter.fg("#FF9933");
//! painter.text("Low Stock");
//! painter.reset();
//! assert_eq!(painter.finish(), "Low Stock");
//! ```

use crate::ui::theme::Theme;

/// Line-oriented output buffer with optional ANSI styling.
#[derive(Debug, Default)]
pub struct Painter {
    out: String,
    plain: bool,
}

impl Painter {
    #[must_use]
    pub const fn new(plain: bool) -> Self {
        Self {
            out: String::new(),
            plain,
        }
    }

    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.plain
    }

    pub fn text(&mut self, text: &str) {
        self.out.push_str(text);
    }

    pub fn spaces(&mut self, count: usize) {
        self.out.extend(std::iter::repeat(' ').take(count));
    }

    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    fn escape(&mut self, code: &str) {
        if !self.plain {
            self.out.push_str(code);
        }
    }

    pub fn fg(&mut self, hex: &str) {
        self.escape(&Theme::fg(hex));
    }

    pub fn bg(&mut self, hex: &str) {
        self.escape(&Theme::bg(hex));
    }

    pub fn bold(&mut self) {
        self.escape(Theme::bold());
    }

    pub fn dim(&mut self) {
        self.escape(Theme::dim());
    }

    pub fn reset(&mut self) {
        self.escape(Theme::reset());
    }

    /// Writes `text` centered in `width` columns, without trailing padding.
    pub fn centered(&mut self, text: &str, width: usize) {
        let padding = width.saturating_sub(display_width(text)) / 2;
        self.spaces(padding);
        self.text(text);
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}

/// Column width of `text`, counting one column per character.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` columns, ending in `...` when shortened.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str("...");
    cut
}

/// Character ranges `(start, end)` where `needle` occurs in `text`, ignoring case.
///
/// Ranges do not overlap. Returns nothing for an empty needle or for text
/// whose lowercase form changes length.
#[must_use]
pub fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = needle.trim().to_lowercase().chars().collect();
    let hay: Vec<char> = text.to_lowercase().chars().collect();
    if needle.is_empty() || hay.len() != text.chars().count() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= hay.len() {
        if hay[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

/// Writes `text` with the given character ranges in the match highlight colors.
///
/// `restore` is re-applied after each highlight so the surrounding style
/// survives the reset.
pub fn render_highlighted_text(
    painter: &mut Painter,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore: &dyn Fn(&mut Painter),
) {
    if ranges.is_empty() {
        painter.text(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }
        if start > current_pos {
            let normal: String = chars[current_pos..start].iter().collect();
            painter.text(&normal);
        }

        painter.fg(&theme.colors.match_highlight_fg);
        painter.bg(&theme.colors.match_highlight_bg);
        let highlighted: String = chars[start..end].iter().collect();
        painter.text(&highlighted);
        painter.reset();
        restore(painter);

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        painter.text(&remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_painter_drops_escapes() {
        let mut painter = Painter::new(true);
        painter.bold();
        painter.text("Orders");
        painter.reset();
        assert_eq!(painter.finish(), "Orders");

        let mut painter = Painter::new(false);
        painter.bold();
        painter.text("Orders");
        assert_eq!(painter.finish(), "\u{1b}[1mOrders");
    }

    #[test]
    fn match_ranges_ignore_case() {
        assert_eq!(match_ranges("Garam Masala", "MA"), [(6, 8)]);
        assert_eq!(match_ranges("Masala Mash", "ma"), [(0, 2), (7, 9)]);
        assert!(match_ranges("Naan", "").is_empty());
        assert!(match_ranges("Naan", "rice").is_empty());
    }

    #[test]
    fn highlighted_text_keeps_all_characters() {
        let theme = Theme::default();
        let mut painter = Painter::new(true);
        let ranges = match_ranges("Paneer Tikka", "tik");
        render_highlighted_text(&mut painter, "Paneer Tikka", &ranges, &theme, &|_| {});
        assert_eq!(painter.finish(), "Paneer Tikka");
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("Butter Chicken", 20), "Butter Chicken");
        assert_eq!(truncate("Butter Chicken", 9), "Butter...");
    }
}
