//! Configuration types for shopdesk
//!
//! Defines `Settings` (`config.toml`) and its sections.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use shopdesk_core::prelude::*;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_BANNER_CLEAR_MS: u64 = 3000;

/// Application settings (`<config_dir>/shopdesk/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Root URL every API path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. Unset means requests never time out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: None,
        }
    }
}

impl ApiSettings {
    /// Parse `base_url`, accepting only http and https.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            Error::config_invalid(format!("api.base_url {:?} is not a URL: {}", self.base_url, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::config_invalid(format!(
                "api.base_url must use http or https, got {:?}",
                other
            ))),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

/// UI behaviour settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long the account save banner stays up
    #[serde(default = "default_banner_clear_ms")]
    pub banner_clear_ms: u64,

    /// Show the key hint line at the bottom of the screen
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            banner_clear_ms: default_banner_clear_ms(),
            show_hints: true,
        }
    }
}

impl UiSettings {
    pub fn banner_clear_delay(&self) -> Duration {
        Duration::from_millis(self.banner_clear_ms)
    }
}

/// Session persistence settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Session file location; defaults to `<data_local_dir>/shopdesk/session.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,
}

impl StorageSettings {
    pub fn session_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.session_file {
            return Ok(path.clone());
        }

        dirs::data_local_dir()
            .map(|dir| dir.join("shopdesk").join("session.json"))
            .ok_or_else(|| Error::config("Could not determine local data directory"))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_banner_clear_ms() -> u64 {
    DEFAULT_BANNER_CLEAR_MS
}

fn default_true() -> bool {
    true
}
