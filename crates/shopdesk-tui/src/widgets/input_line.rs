//! Single-line labelled text input

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::styles;

const READ_ONLY_MARKER: &str = " (read-only)";

/// `Label  value_` on one row. Long values scroll so the end stays visible.
pub struct InputLine<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    label_width: u16,
    focused: bool,
    masked: bool,
    read_only: bool,
}

impl<'a> InputLine<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            label_width: UnicodeWidthStr::width(label) as u16 + 1,
            focused: false,
            masked: false,
            read_only: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Pad labels to a common width so inputs line up
    pub fn label_width(mut self, width: u16) -> Self {
        self.label_width = width;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show one `*` per character
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}

impl Widget for InputLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label_style = if self.focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        let label = format!(
            "{:<width$}",
            self.label,
            width = self.label_width as usize
        );

        let marker = if self.read_only { READ_ONLY_MARKER } else { "" };
        let field_width = (area.width as usize)
            .saturating_sub(self.label_width as usize)
            .saturating_sub(marker.len());
        // Leave a column for the cursor
        let text_width = field_width.saturating_sub(1);

        let shown = if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        };

        let mut spans = vec![Span::styled(label, label_style)];
        let input_style = styles::input(self.focused);

        if shown.is_empty() && !self.focused {
            spans.push(Span::styled(
                fit_head(self.placeholder, field_width),
                input_style.patch(styles::text_muted()),
            ));
        } else {
            let visible = fit_tail(&shown, text_width);
            let used = UnicodeWidthStr::width(visible.as_str());
            spans.push(Span::styled(visible, input_style));
            if self.focused {
                spans.push(Span::styled("_", input_style.patch(styles::accent())));
            }
            let pad = field_width.saturating_sub(used + usize::from(self.focused));
            spans.push(Span::styled(" ".repeat(pad), input_style));
        }

        if !marker.is_empty() {
            spans.push(Span::styled(marker, styles::text_muted()));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default())
            .render(area, buf);
    }
}

/// The longest suffix of `text` that fits in `width` terminal columns.
pub(crate) fn fit_tail(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }

    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    text[start..].to_string()
}

/// The longest prefix of `text` that fits in `width` columns, with `…` when cut.
pub(crate) fn fit_head(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_fit_tail_keeps_end_of_long_values() {
        assert_eq!(fit_tail("hello", 10), "hello");
        assert_eq!(fit_tail("hello world", 5), "world");
        assert_eq!(fit_tail("abc", 0), "");
    }

    #[test]
    fn test_fit_tail_counts_wide_characters() {
        // Each CJK character is two columns wide
        assert_eq!(fit_tail("東京都", 4), "京都");
        assert_eq!(fit_tail("東京都", 5), "京都");
    }

    #[test]
    fn test_fit_head_truncates_with_ellipsis() {
        assert_eq!(fit_head("Nguyen", 10), "Nguyen");
        assert_eq!(fit_head("Nguyen An", 5), "Nguy…");
        assert_eq!(fit_head("Nguyen", 0), "");
    }

    #[test]
    fn test_renders_label_and_value() {
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(InputLine::new("City", "Hanoi").label_width(8), term.area());
        assert!(term.line_contains(0, "City"));
        assert!(term.line_contains(0, "Hanoi"));
    }

    #[test]
    fn test_masked_value_is_hidden() {
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(
            InputLine::new("Password", "secret").masked(),
            term.area(),
        );
        assert!(term.line_contains(0, "******"));
        assert!(!term.buffer_contains("secret"));
    }

    #[test]
    fn test_placeholder_only_when_empty_and_unfocused() {
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(
            InputLine::new("City", "").placeholder("Your City"),
            term.area(),
        );
        assert!(term.buffer_contains("Your City"));

        term.render_widget(
            InputLine::new("City", "").placeholder("Your City").focused(true),
            term.area(),
        );
        assert!(!term.buffer_contains("Your City"));
    }

    #[test]
    fn test_read_only_marker() {
        let mut term = TestTerminal::with_size(60, 1);
        term.render_widget(
            InputLine::new("Email", "an@example.com").read_only(true),
            term.area(),
        );
        assert!(term.buffer_contains("(read-only)"));
    }
}
