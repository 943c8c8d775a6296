//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen
//! - `navigation`: Route changes, the session guard and logout
//! - `login`: Login form handlers
//! - `account`: Account load pipeline, editing and saving
//! - `user_list`: User list loading, filtering and selection

pub(crate) mod account;
pub(crate) mod keys;
pub(crate) mod login;
pub(crate) mod navigation;
pub(crate) mod update;
pub(crate) mod user_list;


use std::time::Duration;

use shopdesk_core::{Credentials, SessionToken, UserId, UserProfile};

use crate::message::Message;
use crate::request::RequestId;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// `POST /auth/login`
    Login { credentials: Credentials },

    /// First account load stage: `GET /auth/auth-check`
    CheckIdentity {
        request: RequestId,
        token: SessionToken,
    },

    /// Second account load stage: `GET /auth/user/{id}`.
    /// Only ever issued after a successful identity check.
    FetchProfile {
        request: RequestId,
        token: SessionToken,
        user_id: UserId,
    },

    /// `PUT /users/{id}` with the whole form
    SaveProfile {
        request: RequestId,
        token: SessionToken,
        profile: UserProfile,
    },

    /// `GET /users`
    FetchUsers {
        request: RequestId,
        token: SessionToken,
    },

    /// Send `BannerExpired { banner_id }` after `delay`
    ScheduleBannerClear { banner_id: u64, delay: Duration },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
