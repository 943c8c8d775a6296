//! Route changes, the session guard and logout

use shopdesk_core::prelude::*;
use shopdesk_core::{Route, NAV_DESTINATIONS};

use crate::message::Message;
use crate::state::{AppState, Focus};

use super::UpdateResult;

/// Routes whose view takes keyboard focus away from the side panel
pub(crate) fn has_focusable_content(route: Route) -> bool {
    matches!(route, Route::MyAccount | Route::Users)
}

/// Go to `route`, redirecting to login if it needs a session we don't have.
///
/// Entering the account editor or the user list triggers its load.
pub fn handle_navigate(state: &mut AppState, route: Route) -> UpdateResult {
    if route.requires_session() && !state.session.is_signed_in() {
        info!("{} requires a session, redirecting to login", route.path());
        redirect_to_login(state);
        return UpdateResult::none();
    }

    info!("Navigate to {}", route.path());
    state.route = route;

    if let Some(index) = NAV_DESTINATIONS.iter().position(|r| *r == route) {
        state.nav_selected = index;
    }

    state.focus = if has_focusable_content(route) {
        Focus::Content
    } else {
        Focus::Nav
    };

    match route {
        Route::MyAccount => UpdateResult::message(Message::LoadAccount),
        Route::Users => UpdateResult::message(Message::LoadUsers),
        _ => UpdateResult::none(),
    }
}

pub fn handle_logout(state: &mut AppState) -> UpdateResult {
    info!("Logging out");
    redirect_to_login(state);
    UpdateResult::none()
}

/// Clear the session and every per-user view, then show login.
pub(crate) fn redirect_to_login(state: &mut AppState) {
    if let Err(e) = state.session.clear() {
        error!("Failed to clear session: {}", e);
    }
    state.reset_views();
    state.route = Route::Login;
}
