//! User list loading

use shopdesk_core::prelude::*;
use shopdesk_core::UserListItem;

use crate::request::RequestId;
use crate::state::AppState;
use crate::user_list::ListFailure;

use super::{UpdateAction, UpdateResult};

/// Fetch the full list. A missing token is reported in the view, not redirected.
pub fn handle_load(state: &mut AppState) -> UpdateResult {
    let request = state.users.begin_load();

    match state.session.require_token() {
        Ok(token) => UpdateResult::action(UpdateAction::FetchUsers { request, token }),
        Err(e) => {
            warn!("User list: {}", e);
            state.users.token_missing();
            UpdateResult::none()
        }
    }
}

pub fn handle_loaded(
    state: &mut AppState,
    request: RequestId,
    users: Vec<UserListItem>,
) -> UpdateResult {
    if !state.users.is_current(request) {
        debug!("Dropping stale user list {:?}", request);
        return UpdateResult::none();
    }

    debug!("Loaded {} users", users.len());
    state.users.loaded(users);
    UpdateResult::none()
}

pub fn handle_load_failed(
    state: &mut AppState,
    request: RequestId,
    failure: ListFailure,
    error: String,
) -> UpdateResult {
    if !state.users.is_current(request) {
        debug!("Dropping stale user list failure {:?}: {}", request, error);
        return UpdateResult::none();
    }

    state.users.load_failed(failure);
    UpdateResult::none()
}
