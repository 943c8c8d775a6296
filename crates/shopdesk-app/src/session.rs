//! Session context: the signed-in identity, backed by a key-value store
//!
//! The context is owned by `AppState` and only touched from the update loop,
//! so there is exactly one writer.

use shopdesk_api::LoginResponse;
use shopdesk_core::prelude::*;
use shopdesk_core::{SessionToken, UserId};

use crate::store::{KeyValueStore, MemoryStore, KEY_TOKEN, KEY_USER, KEY_USER_ID};

#[derive(Debug)]
pub struct SessionContext {
    store: Box<dyn KeyValueStore>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl SessionContext {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Stored token, if any. An empty value counts as absent.
    pub fn token(&self) -> Option<SessionToken> {
        self.store
            .get(KEY_TOKEN)
            .filter(|t| !t.is_empty())
            .map(SessionToken::new)
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.store
            .get(KEY_USER_ID)
            .filter(|id| !id.is_empty())
            .map(UserId::new)
    }

    /// Like [`Self::token`], but a missing token is an [`Error::MissingToken`].
    pub fn require_token(&self) -> Result<SessionToken> {
        self.token().ok_or(Error::MissingToken)
    }

    /// Like [`Self::user_id`], but a missing id is an [`Error::MissingUserId`].
    pub fn require_user_id(&self) -> Result<UserId> {
        self.user_id().ok_or(Error::MissingUserId)
    }

    /// JSON text of the last login response
    pub fn user_json(&self) -> Option<String> {
        self.store.get(KEY_USER)
    }

    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }

    /// Start a session from a successful login.
    ///
    /// Any previous `user` is removed before the new one is stored, and the
    /// cached `userId` is dropped since it belonged to the previous token.
    pub fn begin(&mut self, response: &LoginResponse) -> Result<()> {
        self.store.remove(KEY_USER)?;
        self.store.remove(KEY_USER_ID)?;
        self.store.set(KEY_USER, &response.to_json_string())?;

        match response.token() {
            Some(token) => self.store.set(KEY_TOKEN, token.as_str())?,
            None => {
                warn!("Login response carried no token; session will not authenticate");
                self.store.remove(KEY_TOKEN)?;
            }
        }

        Ok(())
    }

    pub fn set_user_id(&mut self, id: &UserId) -> Result<()> {
        self.store.set(KEY_USER_ID, id.as_str())
    }

    /// Forget the token and everything derived from it.
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(KEY_TOKEN)?;
        self.store.remove(KEY_USER_ID)?;
        self.store.remove(KEY_USER)?;
        Ok(())
    }
}
