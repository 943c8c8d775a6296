//! Account load pipeline, editing and saving

use shopdesk_core::prelude::*;
use shopdesk_core::{LoadStage, ProfileField, UserId, UserProfile};

use crate::message::Message;
use crate::request::RequestId;
use crate::state::AppState;

use super::navigation::redirect_to_login;
use super::{UpdateAction, UpdateResult};

/// Mount the editor: redirect without a token, else start the identity check.
pub fn handle_load(state: &mut AppState) -> UpdateResult {
    let token = match state.session.require_token() {
        Ok(token) => token,
        Err(e) => {
            warn!("Account opened: {}, redirecting to login", e);
            sign_out(state);
            return UpdateResult::none();
        }
    };

    let request = state.account.begin_load();
    UpdateResult::action(UpdateAction::CheckIdentity { request, token })
}

/// Re-fetch the profile for the stored user id, skipping the identity check.
pub fn handle_reload_profile(state: &mut AppState) -> UpdateResult {
    let token = match state.session.require_token() {
        Ok(token) => token,
        Err(e) => {
            warn!("Profile reload: {}, redirecting to login", e);
            sign_out(state);
            return UpdateResult::none();
        }
    };

    let user_id = match state.session.require_user_id() {
        Ok(user_id) => user_id,
        Err(e) => {
            warn!("Profile reload: {}", e);
            state.account.load_failed(LoadStage::IdentityCheck);
            return UpdateResult::none();
        }
    };

    let request = state.account.begin_reload();
    UpdateResult::action(UpdateAction::FetchProfile {
        request,
        token,
        user_id,
    })
}

fn sign_out(state: &mut AppState) {
    redirect_to_login(state);
    state.account.mark_unauthenticated();
}

pub fn handle_identity_resolved(
    state: &mut AppState,
    request: RequestId,
    user_id: UserId,
) -> UpdateResult {
    if !state.account.is_current(request) {
        debug!("Dropping stale identity check result {:?}", request);
        return UpdateResult::none();
    }

    if let Err(e) = state.session.set_user_id(&user_id) {
        error!("Failed to persist user id: {}", e);
    }

    let Ok(token) = state.session.require_token() else {
        sign_out(state);
        return UpdateResult::none();
    };

    state.account.identity_resolved();
    UpdateResult::action(UpdateAction::FetchProfile {
        request,
        token,
        user_id,
    })
}

pub fn handle_profile_loaded(
    state: &mut AppState,
    request: RequestId,
    profile: UserProfile,
) -> UpdateResult {
    if !state.account.is_current(request) {
        debug!("Dropping stale profile {:?}", request);
        return UpdateResult::none();
    }

    state.account.profile_loaded(profile);
    UpdateResult::none()
}

/// A failed stage ends the pipeline; in particular a failed identity check
/// never leads to a profile fetch.
pub fn handle_load_failed(
    state: &mut AppState,
    request: RequestId,
    stage: LoadStage,
    error: String,
) -> UpdateResult {
    if !state.account.is_current(request) {
        debug!("Dropping stale account load failure {:?}: {}", request, error);
        return UpdateResult::none();
    }

    state.account.load_failed(stage);
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, field: ProfileField, value: String) -> UpdateResult {
    if !state.account.update_field(field, value) {
        debug!("{} is read-only", field.label());
    }
    UpdateResult::none()
}

pub fn handle_save(state: &mut AppState) -> UpdateResult {
    let Ok(token) = state.session.require_token() else {
        sign_out(state);
        return UpdateResult::none();
    };

    match state.account.begin_save() {
        Some((request, profile)) => UpdateResult::action(UpdateAction::SaveProfile {
            request,
            token,
            profile,
        }),
        None => UpdateResult::none(),
    }
}

/// Raise the success banner, schedule its removal and re-fetch the profile.
pub fn handle_saved(state: &mut AppState, request: RequestId) -> UpdateResult {
    if !state.account.is_current(request) {
        debug!("Dropping stale save result {:?}", request);
        return UpdateResult::none();
    }

    info!("Account updated");
    let banner_id = state.account.save_succeeded();
    UpdateResult {
        message: Some(Message::ReloadProfile),
        action: Some(UpdateAction::ScheduleBannerClear {
            banner_id,
            delay: state.settings.ui.banner_clear_delay(),
        }),
    }
}

pub fn handle_save_failed(state: &mut AppState, request: RequestId, error: String) -> UpdateResult {
    if !state.account.is_current(request) {
        debug!("Dropping stale save failure {:?}: {}", request, error);
        return UpdateResult::none();
    }

    let banner_id = state.account.save_failed();
    UpdateResult::action(UpdateAction::ScheduleBannerClear {
        banner_id,
        delay: state.settings.ui.banner_clear_delay(),
    })
}

pub fn handle_banner_expired(state: &mut AppState, banner_id: u64) -> UpdateResult {
    if !state.account.clear_banner(banner_id) {
        trace!("Banner {} already replaced", banner_id);
    }
    UpdateResult::none()
}
