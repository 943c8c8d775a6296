//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, Focus};
use crate::AppState;

use super::{account, keys::handle_key, login, navigation, user_list, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => navigation::handle_navigate(state, route),
        Message::Logout => navigation::handle_logout(state),
        Message::FocusNav => {
            if state.shows_nav() {
                state.focus = Focus::Nav;
            }
            UpdateResult::none()
        }
        Message::FocusContent => {
            if navigation::has_focusable_content(state.route) {
                state.focus = Focus::Content;
            }
            UpdateResult::none()
        }
        Message::NavSelectNext => {
            state.nav_select_next();
            UpdateResult::none()
        }
        Message::NavSelectPrev => {
            state.nav_select_prev();
            UpdateResult::none()
        }
        Message::NavOpenSelected => UpdateResult::message(Message::Navigate(state.nav_destination())),

        // ─────────────────────────────────────────────────────────
        // Login
        // ─────────────────────────────────────────────────────────
        Message::LoginInput { field, value } => {
            state.login.set_field(field, value);
            UpdateResult::none()
        }
        Message::LoginFocusNext => {
            state.login.focus = state.login.focus.next();
            UpdateResult::none()
        }
        Message::LoginFocusPrev => {
            state.login.focus = state.login.focus.prev();
            UpdateResult::none()
        }
        Message::LoginActivate => login::handle_activate(state),
        Message::LoginSubmit => login::handle_submit(state),
        Message::LoginSucceeded(response) => login::handle_succeeded(state, response),
        Message::LoginFailed { error } => login::handle_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Account
        // ─────────────────────────────────────────────────────────
        Message::LoadAccount => account::handle_load(state),
        Message::ReloadProfile => account::handle_reload_profile(state),
        Message::IdentityResolved { request, user_id } => {
            account::handle_identity_resolved(state, request, user_id)
        }
        Message::ProfileLoaded { request, profile } => {
            account::handle_profile_loaded(state, request, profile)
        }
        Message::AccountLoadFailed {
            request,
            stage,
            error,
        } => account::handle_load_failed(state, request, stage, error),
        Message::AccountInput { field, value } => account::handle_input(state, field, value),
        Message::AccountFocusNext => {
            state.account.focus_next();
            UpdateResult::none()
        }
        Message::AccountFocusPrev => {
            state.account.focus_prev();
            UpdateResult::none()
        }
        Message::SaveAccount => account::handle_save(state),
        Message::AccountSaved { request } => account::handle_saved(state, request),
        Message::AccountSaveFailed { request, error } => {
            account::handle_save_failed(state, request, error)
        }
        Message::BannerExpired { banner_id } => account::handle_banner_expired(state, banner_id),

        // ─────────────────────────────────────────────────────────
        // User List
        // ─────────────────────────────────────────────────────────
        Message::LoadUsers => user_list::handle_load(state),
        Message::UsersLoaded { request, users } => user_list::handle_loaded(state, request, users),
        Message::UsersLoadFailed {
            request,
            failure,
            error,
        } => user_list::handle_load_failed(state, request, failure, error),
        Message::FilterInput { field, value } => {
            state.users.set_criterion(field, value);
            UpdateResult::none()
        }
        Message::FilterFocusNext => {
            state.users.focus = state.users.focus.next();
            UpdateResult::none()
        }
        Message::FilterFocusPrev => {
            state.users.focus = state.users.focus.prev();
            UpdateResult::none()
        }
        Message::UserSelectNext => {
            state.users.select_next();
            UpdateResult::none()
        }
        Message::UserSelectPrev => {
            state.users.select_prev();
            UpdateResult::none()
        }
        Message::UserSelectFirst => {
            state.users.select_first();
            UpdateResult::none()
        }
        Message::UserSelectLast => {
            state.users.select_last();
            UpdateResult::none()
        }
    }
}
