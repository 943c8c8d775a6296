//! Reqwest-backed [`UserApi`](crate::UserApi) implementation.
//!
//! This adapter owns transport details only: URL building, bearer auth,
//! status mapping and JSON decoding into domain types.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use shopdesk_core::prelude::*;
use shopdesk_core::{Credentials, SessionToken, UserId, UserListItem, UserProfile};

use crate::client::UserApi;
use crate::dto::{parse_auth_check, LoginResponse};

/// HTTP client for the remote User API rooted at one base URL.
#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: Client,
    base_url: Url,
}

impl HttpUserApi {
    /// Build a client for `base_url`.
    ///
    /// No request timeout is applied unless `timeout` is given.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL. Segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::config_invalid(format!("API base URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and return the body of a 2xx response.
    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            debug!("API responded with status {}", status.as_u16());
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }

        Ok(body.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        token: &SessionToken,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        debug!("GET {}", url);
        let body = self
            .send(self.client.get(url).bearer_auth(token.as_str()))
            .await?;
        decode(&body)
    }
}

impl UserApi for HttpUserApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let url = self.endpoint(&["auth", "login"])?;
        debug!("POST {}", url);
        let body = self.send(self.client.post(url).json(credentials)).await?;
        Ok(LoginResponse::new(decode::<Value>(&body)?))
    }

    async fn auth_check(&self, token: &SessionToken) -> Result<UserId> {
        let body: Value = self.get_json(&["auth", "auth-check"], token).await?;
        parse_auth_check(&body)
    }

    async fn fetch_profile(&self, token: &SessionToken, id: &UserId) -> Result<UserProfile> {
        self.get_json(&["auth", "user", id.as_str()], token).await
    }

    async fn list_users(&self, token: &SessionToken) -> Result<Vec<UserListItem>> {
        self.get_json(&["users"], token).await
    }

    async fn update_profile(&self, token: &SessionToken, profile: &UserProfile) -> Result<()> {
        if profile.id.is_empty() {
            return Err(Error::MissingUserId);
        }
        let url = self.endpoint(&["users", profile.id.as_str()])?;
        debug!("PUT {}", url);
        self.send(
            self.client
                .put(url)
                .bearer_auth(token.as_str())
                .json(profile),
        )
        .await?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| Error::decode(format!("invalid JSON payload: {e}")))
}

fn map_transport_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::transport(format!("request timed out: {error}"))
    } else {
        Error::transport(error.to_string())
    }
}
