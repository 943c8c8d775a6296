//! Configuration file parsing for shopdesk
//!
//! Supports `<config_dir>/shopdesk/config.toml` with environment and CLI
//! overrides layered on top.

pub mod settings;
pub mod types;

pub use settings::{
    apply_cli_overrides, apply_env_overrides, default_config_path, init_config_dir,
    load_settings, resolve_settings, SettingsOverrides, API_URL_ENV,
};
pub use types::*;
