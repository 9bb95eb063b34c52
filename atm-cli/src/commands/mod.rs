//! CLI command implementations

pub mod logs;
pub mod session;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use atm_core::config::Config;
use atm_core::services::EntryPoint;
use atm_core::AtmContext;

/// Default settings file location: `<config dir>/atm/settings.json`
pub fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("atm")
        .join("settings.json")
}

/// Load settings and build a fresh context
pub fn get_context(settings_path: &Path, hardened: bool) -> Result<AtmContext> {
    let mut config = Config::load(settings_path)
        .with_context(|| format!("Failed to load settings: {:?}", settings_path))?;

    if hardened {
        config.enable_hardened_credentials();
    }

    Ok(AtmContext::new(config, EntryPoint::Cli))
}
