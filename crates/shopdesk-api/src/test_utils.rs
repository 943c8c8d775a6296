//! Test utilities for API consumers
//!
//! [`FakeUserApi`] stands in for the remote server: every operation succeeds
//! with canned data unless a failure has been scripted for it, and every call
//! is recorded so tests can assert on what was sent.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use serde_json::{json, Value};

use shopdesk_core::prelude::*;
use shopdesk_core::{Credentials, SessionToken, UserId, UserListItem, UserProfile};

use crate::client::UserApi;
use crate::dto::LoginResponse;

/// Operations of [`UserApi`], used to script failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FakeOp {
    Login,
    AuthCheck,
    FetchProfile,
    ListUsers,
    UpdateProfile,
}

/// A scripted failure, converted into the matching [`Error`] on each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeFailure {
    Http(u16),
    Transport(String),
    Decode,
}

impl FakeFailure {
    fn to_error(&self) -> Error {
        match self {
            FakeFailure::Http(status) => Error::Http { status: *status },
            FakeFailure::Transport(message) => Error::transport(message.clone()),
            FakeFailure::Decode => Error::decode("scripted decode failure"),
        }
    }
}

/// One recorded call, with the arguments that matter to assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Login(Credentials),
    AuthCheck,
    FetchProfile(UserId),
    ListUsers,
    UpdateProfile(UserProfile),
}

impl ApiCall {
    pub fn op(&self) -> FakeOp {
        match self {
            ApiCall::Login(_) => FakeOp::Login,
            ApiCall::AuthCheck => FakeOp::AuthCheck,
            ApiCall::FetchProfile(_) => FakeOp::FetchProfile,
            ApiCall::ListUsers => FakeOp::ListUsers,
            ApiCall::UpdateProfile(_) => FakeOp::UpdateProfile,
        }
    }
}

/// In-memory [`UserApi`] with scripted outcomes and a call log.
#[derive(Debug)]
pub struct FakeUserApi {
    login_response: Mutex<Value>,
    user_id: Mutex<UserId>,
    profile: Mutex<UserProfile>,
    users: Mutex<Vec<UserListItem>>,
    failures: Mutex<HashMap<FakeOp, FakeFailure>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl Default for FakeUserApi {
    fn default() -> Self {
        let profile = sample_profile();
        Self {
            login_response: Mutex::new(json!({
                "token": "test-token",
                "user": { "id": profile.id, "email": profile.email },
            })),
            user_id: Mutex::new(UserId::new(profile.id.clone())),
            profile: Mutex::new(profile),
            users: Mutex::new(sample_users()),
            failures: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeUserApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_login_response(self, body: Value) -> Self {
        *lock(&self.login_response) = body;
        self
    }

    pub fn with_profile(self, profile: UserProfile) -> Self {
        *lock(&self.user_id) = UserId::new(profile.id.clone());
        *lock(&self.profile) = profile;
        self
    }

    pub fn with_users(self, users: Vec<UserListItem>) -> Self {
        *lock(&self.users) = users;
        self
    }

    pub fn with_failure(self, op: FakeOp, failure: FakeFailure) -> Self {
        self.fail(op, failure);
        self
    }

    /// Script `op` to fail from now on.
    pub fn fail(&self, op: FakeOp, failure: FakeFailure) {
        lock(&self.failures).insert(op, failure);
    }

    /// Let `op` succeed again.
    pub fn recover(&self, op: FakeOp) {
        lock(&self.failures).remove(&op);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self, op: FakeOp) -> usize {
        lock(&self.calls).iter().filter(|c| c.op() == op).count()
    }

    /// Profile currently held by the fake server.
    pub fn stored_profile(&self) -> UserProfile {
        lock(&self.profile).clone()
    }

    fn record(&self, call: ApiCall) -> Result<()> {
        let op = call.op();
        lock(&self.calls).push(call);
        match lock(&self.failures).get(&op) {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

impl UserApi for FakeUserApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.record(ApiCall::Login(credentials.clone()))?;
        Ok(LoginResponse::new(lock(&self.login_response).clone()))
    }

    async fn auth_check(&self, _token: &SessionToken) -> Result<UserId> {
        self.record(ApiCall::AuthCheck)?;
        Ok(lock(&self.user_id).clone())
    }

    async fn fetch_profile(&self, _token: &SessionToken, id: &UserId) -> Result<UserProfile> {
        self.record(ApiCall::FetchProfile(id.clone()))?;
        Ok(lock(&self.profile).clone())
    }

    async fn list_users(&self, _token: &SessionToken) -> Result<Vec<UserListItem>> {
        self.record(ApiCall::ListUsers)?;
        Ok(lock(&self.users).clone())
    }

    async fn update_profile(&self, _token: &SessionToken, profile: &UserProfile) -> Result<()> {
        self.record(ApiCall::UpdateProfile(profile.clone()))?;
        *lock(&self.profile) = profile.clone();
        Ok(())
    }
}

// A panicking test must not cascade into unrelated assertions.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Profile returned by the default fake.
pub fn sample_profile() -> UserProfile {
    UserProfile {
        id: "u-1".into(),
        first_name: "An".to_string(),
        last_name: "Nguyen".to_string(),
        phone_number: "0901234567".to_string(),
        email: "an@example.com".to_string(),
        date_of_birth: "1990-04-12".to_string(),
        address: "12 Trang Tien".to_string(),
        city: "Hanoi".to_string(),
    }
}

/// Builds a list item with the fields the table and filters read.
pub fn test_user(id: &str, first: &str, last: &str, role: &str, created_at: &str) -> UserListItem {
    UserListItem {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        address: "Hanoi".to_string(),
        created_at: created_at.to_string(),
        role: role.to_string(),
    }
}

/// Users returned by the default fake.
pub fn sample_users() -> Vec<UserListItem> {
    vec![
        test_user("1", "An", "Nguyen", "admin", "2024-01-05T00:00:00Z"),
        test_user("2", "Binh", "Tran", "customer", "2024-02-10T08:30:00Z"),
        test_user("3", "Chi", "Le", "customer", "2023-12-31T23:59:59Z"),
    ]
}
