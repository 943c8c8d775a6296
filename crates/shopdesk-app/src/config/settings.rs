//! Settings loading for `config.toml`
//!
//! Precedence, highest first: CLI overrides, `SHOPDESK_API_URL`, the config
//! file, built-in defaults.

use std::path::{Path, PathBuf};

use shopdesk_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "shopdesk";

/// Environment variable overriding `api.base_url`
pub const API_URL_ENV: &str = "SHOPDESK_API_URL";

/// Values given on the command line. `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub api_url: Option<String>,
    pub session_file: Option<PathBuf>,
}

/// `<config_dir>/shopdesk/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing or unparseable file yields defaults; only the latter is logged
/// as a warning.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply `SHOPDESK_API_URL` if it is set and non-empty.
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(url) = std::env::var(API_URL_ENV) {
        let url = url.trim();
        if !url.is_empty() {
            debug!("{} overrides api.base_url", API_URL_ENV);
            settings.api.base_url = url.to_string();
        }
    }
}

pub fn apply_cli_overrides(settings: &mut Settings, overrides: &SettingsOverrides) {
    if let Some(url) = &overrides.api_url {
        settings.api.base_url = url.clone();
    }
    if let Some(path) = &overrides.session_file {
        settings.storage.session_file = Some(path.clone());
    }
}

/// Build the effective settings and validate them.
///
/// `config_path` falls back to [`default_config_path`]. An invalid
/// `api.base_url` after all layers are applied is a fatal
/// [`Error::ConfigInvalid`].
pub fn resolve_settings(
    config_path: Option<&Path>,
    overrides: &SettingsOverrides,
) -> Result<Settings> {
    let mut settings = match config_path
        .map(Path::to_path_buf)
        .or_else(default_config_path)
    {
        Some(path) => load_settings(&path),
        None => {
            warn!("No config directory available, using defaults");
            Settings::default()
        }
    };

    apply_env_overrides(&mut settings);
    apply_cli_overrides(&mut settings, overrides);

    settings.api.parsed_base_url()?;
    Ok(settings)
}

/// Write a commented default config to `config_path` unless one exists.
///
/// Returns whether a file was created.
pub fn init_config_dir(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        debug!("Config already present at {:?}", config_path);
        return Ok(false);
    }

    if let Some(dir) = config_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
        }
    }

    let default_content = r#"# shopdesk configuration

[api]
base_url = "http://localhost:3000"
# request_timeout_ms = 10000   # Unset = no timeout

[ui]
banner_clear_ms = 3000       # How long the account save banner stays up
show_hints = true

[storage]
# session_file = "/path/to/session.json"   # Default: <data dir>/shopdesk/session.json
"#;
    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    struct EnvGuard;

    impl EnvGuard {
        fn set(value: &str) -> Self {
            std::env::set_var(API_URL_ENV, value);
            Self
        }

        fn unset() -> Self {
            std::env::remove_var(API_URL_ENV);
            Self
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            std::env::remove_var(API_URL_ENV);
        }
    }

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_settings_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(&dir.path().join("nope.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_invalid_toml_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "[api\nbase_url = ");
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_load_settings_reads_values() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
            [api]
            base_url = "https://shop.example.com"

            [ui]
            banner_clear_ms = 1500
            "#,
        );

        let settings = load_settings(&path);
        assert_eq!(settings.api.base_url, "https://shop.example.com");
        assert_eq!(settings.ui.banner_clear_ms, 1500);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let _guard = EnvGuard::set("http://env.example.com");
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "[api]\nbase_url = \"http://file.example.com\"\n");

        let settings = resolve_settings(Some(&path), &SettingsOverrides::default()).unwrap();
        assert_eq!(settings.api.base_url, "http://env.example.com");
    }

    #[test]
    #[serial]
    fn test_empty_env_is_ignored() {
        let _guard = EnvGuard::set("  ");
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "[api]\nbase_url = \"http://file.example.com\"\n");

        let settings = resolve_settings(Some(&path), &SettingsOverrides::default()).unwrap();
        assert_eq!(settings.api.base_url, "http://file.example.com");
    }

    #[test]
    #[serial]
    fn test_cli_overrides_env() {
        let _guard = EnvGuard::set("http://env.example.com");
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "");

        let overrides = SettingsOverrides {
            api_url: Some("http://cli.example.com".to_string()),
            session_file: Some(PathBuf::from("/tmp/shopdesk-session.json")),
        };
        let settings = resolve_settings(Some(&path), &overrides).unwrap();

        assert_eq!(settings.api.base_url, "http://cli.example.com");
        assert_eq!(
            settings.storage.session_file,
            Some(PathBuf::from("/tmp/shopdesk-session.json"))
        );
    }

    #[test]
    #[serial]
    fn test_resolve_rejects_invalid_base_url() {
        let _guard = EnvGuard::unset();
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "[api]\nbase_url = \"localhost 3000\"\n");

        let err = resolve_settings(Some(&path), &SettingsOverrides::default()).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_init_config_dir_creates_parseable_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shopdesk").join(CONFIG_FILENAME);

        assert!(init_config_dir(&path).unwrap());
        assert_eq!(load_settings(&path), Settings::default());

        // Second call leaves the file alone
        std::fs::write(&path, "[ui]\nshow_hints = false\n").unwrap();
        assert!(!init_config_dir(&path).unwrap());
        assert!(!load_settings(&path).ui.show_hints);
    }
}
