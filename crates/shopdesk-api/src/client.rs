//! The `UserApi` trait: every call the console makes to the remote API
//!
//! Controllers never talk HTTP directly. Background tasks receive an
//! implementation of this trait, which lets the handler tests run against
//! [`crate::test_utils::FakeUserApi`] instead of a server.

use shopdesk_core::prelude::*;
use shopdesk_core::{Credentials, SessionToken, UserId, UserListItem, UserProfile};

use crate::dto::LoginResponse;

/// Remote User API operations
///
/// | Operation | Method | Path |
/// |---|---|---|
/// | [`login`](LocalUserApi::login) | POST | `/auth/login` |
/// | [`auth_check`](LocalUserApi::auth_check) | GET | `/auth/auth-check` |
/// | [`fetch_profile`](LocalUserApi::fetch_profile) | GET | `/auth/user/{id}` |
/// | [`list_users`](LocalUserApi::list_users) | GET | `/users` |
/// | [`update_profile`](LocalUserApi::update_profile) | PUT | `/users/{id}` |
///
/// All calls except `login` send the token as a bearer credential. Any
/// non-2xx status is reported as [`Error::Http`] without further branching.
#[trait_variant::make(UserApi: Send)]
pub trait LocalUserApi {
    /// Exchange credentials for a session
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;

    /// Resolve the id of the user the token belongs to
    async fn auth_check(&self, token: &SessionToken) -> Result<UserId>;

    /// Fetch the full profile of a user
    async fn fetch_profile(&self, token: &SessionToken, id: &UserId) -> Result<UserProfile>;

    /// Fetch every user for the admin list
    async fn list_users(&self, token: &SessionToken) -> Result<Vec<UserListItem>>;

    /// Replace a user's profile with `profile`, keyed by `profile.id`
    async fn update_profile(&self, token: &SessionToken, profile: &UserProfile) -> Result<()>;
}
