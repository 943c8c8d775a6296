//! shopdesk - Terminal console for storefront account administration
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use tracing::info;

use shopdesk_app::config::{self, SettingsOverrides};

/// shopdesk - Sign in, edit your account and browse users from the terminal
#[derive(Parser, Debug)]
#[command(name = "shopdesk")]
#[command(version, about = "Terminal console for storefront account administration", long_about = None)]
struct Args {
    /// API base URL (overrides SHOPDESK_API_URL and the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Where the session (token, user id) is persisted
    #[arg(long, value_name = "PATH")]
    session_file: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config
            .or_else(config::default_config_path)
            .ok_or_else(|| eyre!("No config directory available, pass --config"))?;
        if config::init_config_dir(&path)? {
            println!("Created {}", path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    shopdesk_core::logging::init()?;

    let overrides = SettingsOverrides {
        api_url: args.api_url,
        session_file: args.session_file,
    };
    let settings = config::resolve_settings(args.config.as_deref(), &overrides)?;
    info!(
        "Settings resolved: base_url={}, banner_clear_ms={}",
        settings.api.base_url, settings.ui.banner_clear_ms
    );

    shopdesk_tui::run(settings).await?;
    Ok(())
}
