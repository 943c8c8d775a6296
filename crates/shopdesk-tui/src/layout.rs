//! Screen layout definitions for the TUI
//!
//! Header on top, an optional hints line at the bottom, and between them the
//! route's view with the side navigation panel on its left when signed in.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the side navigation panel, borders included
pub const NAV_WIDTH: u16 = 28;

const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar (app name + route title)
    pub header: Rect,

    /// Side navigation panel, only on routes behind the session guard
    pub nav: Option<Rect>,

    /// The current route's view
    pub content: Rect,

    /// One-line key hints
    pub hints: Option<Rect>,
}

/// Split the screen.
///
/// The panel is dropped when the terminal is too narrow to leave the content
/// at least as wide as the panel itself.
pub fn create(area: Rect, show_nav: bool, show_hints: bool) -> ScreenAreas {
    let hints_height = if show_hints { 1 } else { 0 };

    let [header, body, hints] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(hints_height),
    ])
    .areas(area);

    let (nav, content) = if show_nav && body.width >= NAV_WIDTH * 2 {
        let [nav, content] =
            Layout::horizontal([Constraint::Length(NAV_WIDTH), Constraint::Min(NAV_WIDTH)])
                .areas(body);
        (Some(nav), content)
    } else {
        (None, body)
    };

    ScreenAreas {
        header,
        nav,
        content,
        hints: show_hints.then_some(hints),
    }
}

/// A `width` x `height` rectangle centered in `area`, clamped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_in_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true, true);

        assert_eq!(layout.header.height, 3);
        let nav = layout.nav.unwrap();
        assert_eq!(nav.width, NAV_WIDTH);
        assert_eq!(layout.content.x, NAV_WIDTH);
        assert_eq!(layout.content.width, 80 - NAV_WIDTH);
        assert_eq!(layout.content.height, 20);
        assert_eq!(layout.hints.unwrap().y, 23);
    }

    #[test]
    fn test_public_layout_has_no_panel() {
        let layout = create(Rect::new(0, 0, 80, 24), false, true);
        assert!(layout.nav.is_none());
        assert_eq!(layout.content.width, 80);
    }

    #[test]
    fn test_hints_disabled() {
        let layout = create(Rect::new(0, 0, 80, 24), true, false);
        assert!(layout.hints.is_none());
        assert_eq!(layout.header.height + layout.content.height, 24);
    }

    #[test]
    fn test_narrow_terminal_drops_panel() {
        let layout = create(Rect::new(0, 0, 40, 12), true, true);
        assert!(layout.nav.is_none());
        assert_eq!(layout.content.width, 40);
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(10, 5, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(15, 8, 10, 4));
        assert_eq!(centered(area, 50, 50), area);
    }
}
