//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use shopdesk_core::Route;

use crate::theme::{palette, styles};

/// Title bar: app name, the current screen and the session indicator
pub struct MainHeader {
    route: Route,
    signed_in: bool,
}

impl MainHeader {
    pub fn new(route: Route, signed_in: bool) -> Self {
        Self { route, signed_in }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(" shopdesk", styles::accent_bold()),
            Span::styled(" › ", styles::text_muted()),
            Span::styled(self.route.title(), styles::text_primary()),
        ]);
        Paragraph::new(title).render(inner, buf);

        let (dot, label, style) = if self.signed_in {
            ("●", "signed in ", styles::text_secondary().fg(palette::STATUS_GREEN))
        } else {
            ("○", "signed out ", styles::text_muted())
        };
        let status = format!("{} {}", dot, label);
        let width = UnicodeWidthStr::width(status.as_str()) as u16;
        if inner.width > width + 20 {
            buf.set_string(inner.right() - width, inner.y, status, style);
        }
    }
}
