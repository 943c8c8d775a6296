//! Login form handlers

use shopdesk_api::LoginResponse;
use shopdesk_core::prelude::*;
use shopdesk_core::Route;

use crate::login::LoginFocus;
use crate::message::Message;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Enter on the login screen: links navigate, everything else submits.
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    match state.login.focus {
        LoginFocus::SignUp => UpdateResult::message(Message::Navigate(Route::SignUp)),
        LoginFocus::LostPassword => UpdateResult::message(Message::Navigate(Route::LostPassword)),
        LoginFocus::Email | LoginFocus::Password | LoginFocus::Submit => {
            UpdateResult::message(Message::LoginSubmit)
        }
    }
}

pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    match state.login.begin_submit() {
        Some(credentials) => {
            debug!("Submitting login for {}", credentials.email);
            UpdateResult::action(UpdateAction::Login { credentials })
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_succeeded(state: &mut AppState, response: LoginResponse) -> UpdateResult {
    if !state.login.submitting {
        debug!("Ignoring login response with no submit in flight");
        return UpdateResult::none();
    }

    if let Err(e) = state.session.begin(&response) {
        error!("Failed to persist session: {}", e);
    }
    state.login.reset();
    info!("Login succeeded");

    UpdateResult::message(Message::Navigate(Route::Home))
}

pub fn handle_failed(state: &mut AppState, error: String) -> UpdateResult {
    if !state.login.submitting {
        return UpdateResult::none();
    }

    debug!("Login rejected: {}", error);
    state.login.submit_failed();
    UpdateResult::none()
}
