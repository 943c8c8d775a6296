//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use shopdesk_app::state::{AppState, Focus};
use shopdesk_core::Route;

use crate::layout;
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Pure: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.shows_nav(), state.settings.ui.show_hints);

    frame.render_widget(
        widgets::MainHeader::new(state.route, state.session.is_signed_in()),
        areas.header,
    );

    if let Some(nav) = areas.nav {
        frame.render_widget(
            widgets::NavPanel::new(state.route, state.nav_selected, state.focus == Focus::Nav),
            nav,
        );
    }

    // Without the panel there is nothing else to focus
    let content_focused = areas.nav.is_none() || state.focus == Focus::Content;

    match state.route {
        Route::Login => frame.render_widget(widgets::LoginForm::new(&state.login), areas.content),
        Route::MyAccount => frame.render_widget(
            widgets::AccountForm::new(&state.account, content_focused),
            areas.content,
        ),
        Route::Users => frame.render_widget(
            widgets::UserTable::new(&state.users, content_focused),
            areas.content,
        ),
        route => frame.render_widget(
            widgets::Placeholder::new(route, content_focused),
            areas.content,
        ),
    }

    if let Some(hints) = areas.hints {
        frame.render_widget(widgets::HintsBar::new(widgets::hints_for(state)), hints);
    }
}
