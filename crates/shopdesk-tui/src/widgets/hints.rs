//! Bottom key hints line

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use shopdesk_app::state::{AppState, Focus};
use shopdesk_core::Route;

use crate::theme::styles;

/// Key/description pairs for whatever currently has focus
pub fn hints_for(state: &AppState) -> &'static [(&'static str, &'static str)] {
    match (state.route, state.focus) {
        (Route::Login, _) => &[
            ("Tab", "next"),
            ("Enter", "select"),
            ("Esc", "quit"),
        ],
        (Route::SignUp | Route::LostPassword, _) => &[("Esc", "back to login"), ("q", "quit")],
        (Route::MyAccount, Focus::Content) => &[
            ("Tab", "next field"),
            ("Enter", "save"),
            ("Esc", "menu"),
        ],
        (Route::Users, Focus::Content) => &[
            ("Tab", "next filter"),
            ("↑↓", "select"),
            ("Ctrl+R", "reload"),
            ("Esc", "menu"),
        ],
        (Route::MyAccount | Route::Users, Focus::Nav) => &[
            ("↑↓", "move"),
            ("Enter", "open"),
            ("Tab", "content"),
            ("q", "quit"),
        ],
        _ => &[("↑↓", "move"), ("Enter", "open"), ("q", "quit")],
    }
}

pub struct HintsBar<'a> {
    hints: &'a [(&'a str, &'a str)],
}

impl<'a> HintsBar<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self { hints }
    }
}

impl Widget for HintsBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ·  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
