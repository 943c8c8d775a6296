//! Screens whose flows live in the web storefront

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use shopdesk_core::Route;

use crate::theme::styles;

/// Title, the storefront path, and how to get back
pub struct Placeholder {
    route: Route,
    focused: bool,
}

impl Placeholder {
    pub fn new(route: Route, focused: bool) -> Self {
        Self { route, focused }
    }

    fn body(&self) -> Vec<Line<'static>> {
        if self.route == Route::Home {
            return vec![
                Line::from(Span::styled("Welcome back!", styles::accent_bold())),
                Line::default(),
                Line::from(Span::styled(
                    "Pick a destination from the menu, or press Ctrl+U for the user list.",
                    styles::text_secondary(),
                )),
            ];
        }

        let back = if self.route.has_nav_panel() {
            "Use the menu to go elsewhere."
        } else {
            "Press Esc to return to login."
        };

        vec![
            Line::from(Span::styled(self.route.title(), styles::accent_bold())),
            Line::default(),
            Line::from(Span::styled(
                format!(
                    "This page is available in the web storefront at {}.",
                    self.route.path()
                ),
                styles::text_secondary(),
            )),
            Line::default(),
            Line::from(Span::styled(back, styles::text_muted())),
        ]
    }
}

impl Widget for Placeholder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let top_pad = inner.height.saturating_sub(5) / 2;
        let body_area = Rect {
            y: inner.y + top_pad,
            height: inner.height - top_pad,
            ..inner
        };

        Paragraph::new(self.body())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body_area, buf);
    }
}
