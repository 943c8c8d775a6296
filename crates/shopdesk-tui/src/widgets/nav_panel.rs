//! Side navigation panel
//!
//! The fixed destination list followed by the global shortcuts.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use shopdesk_core::{Route, NAV_DESTINATIONS};

use crate::theme::styles;

/// Shortcut label and key, in display order
pub const SHORTCUTS: [(&str, &str); 3] = [
    ("Home", "Ctrl+O"),
    ("Users", "Ctrl+U"),
    ("Logout", "Ctrl+L"),
];

pub struct NavPanel {
    current: Route,
    selected: usize,
    focused: bool,
}

impl NavPanel {
    pub fn new(current: Route, selected: usize, focused: bool) -> Self {
        Self {
            current,
            selected,
            focused,
        }
    }
}

impl Widget for NavPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(Span::styled(" Menu ", styles::accent()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines: Vec<Line> = NAV_DESTINATIONS
            .iter()
            .enumerate()
            .map(|(i, route)| {
                let marker = if *route == self.current { "▸ " } else { "  " };
                let text = format!("{}{}", marker, route.title());
                let style = if i == self.selected && self.focused {
                    styles::focused_selected()
                } else if *route == self.current {
                    styles::accent()
                } else {
                    styles::text_primary()
                };
                Line::from(Span::styled(text, style))
            })
            .collect();

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(" Shortcuts", styles::text_muted())));
        for (label, key) in SHORTCUTS {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<8}", label), styles::text_secondary()),
                Span::styled(key, styles::keybinding()),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_lists_destinations_in_order() {
        let mut term = TestTerminal::new();
        term.render_widget(NavPanel::new(Route::Home, 0, true), Rect::new(0, 0, 28, 14));

        assert!(term.line_contains(1, "My Account"));
        assert!(term.line_contains(2, "My Orders"));
        assert!(term.line_contains(3, "Support"));
        assert!(term.line_contains(4, "Change Password"));
    }

    #[test]
    fn test_lists_shortcuts() {
        let mut term = TestTerminal::new();
        term.render_widget(NavPanel::new(Route::Home, 0, false), Rect::new(0, 0, 28, 14));

        assert!(term.buffer_contains("Ctrl+O"));
        assert!(term.buffer_contains("Ctrl+U"));
        assert!(term.buffer_contains("Ctrl+L"));
        assert!(term.buffer_contains("Logout"));
    }

    #[test]
    fn test_marks_current_route() {
        let mut term = TestTerminal::new();
        term.render_widget(
            NavPanel::new(Route::Support, 2, false),
            Rect::new(0, 0, 28, 14),
        );
        assert!(term.line_contains(3, "▸ Support"));
    }
}
