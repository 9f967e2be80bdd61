//! Settings loader for config.toml and override resolution

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::{OwnerIdStatus, Overrides, ResolvedConfig, Settings};
use taskdeck_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "taskdeck";

const ENV_API_URL: &str = "TASKDECK_API_URL";
const ENV_USER_ID: &str = "TASKDECK_USER_ID";

const DEFAULT_CONFIG: &str = r#"# taskdeck configuration

[api]
base_url = "https://mate.academy/students-api"
# Owner id for every request (required, positive integer)
# user_id = 1234
timeout_ms = 10000

[ui]
show_key_hints = true
"#;

/// `<config_dir>/taskdeck/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`, falling back to defaults
///
/// A missing, unreadable or invalid file is never fatal.
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

/// Write a commented default config file if none exists
///
/// Returns `true` if a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    info!("Wrote default config to {:?}", config_path);
    Ok(true)
}

/// Apply environment and CLI overrides on top of file settings
///
/// Priority: CLI flag, environment variable, config file, default.
pub fn resolve(settings: &Settings, overrides: &Overrides) -> ResolvedConfig {
    resolve_with_env(
        settings,
        overrides,
        std::env::var(ENV_API_URL).ok(),
        std::env::var(ENV_USER_ID).ok(),
    )
}

fn resolve_with_env(
    settings: &Settings,
    overrides: &Overrides,
    env_api_url: Option<String>,
    env_user_id: Option<String>,
) -> ResolvedConfig {
    let base_url = overrides
        .api_url
        .clone()
        .or(env_api_url.filter(|url| !url.trim().is_empty()))
        .unwrap_or_else(|| settings.api.base_url.clone());

    let owner = match (overrides.user_id, env_user_id, settings.api.user_id) {
        (Some(id), _, _) => validate_owner_id(&id.to_string()),
        (None, Some(raw), _) => validate_owner_id(&raw),
        (None, None, Some(id)) => validate_owner_id(&id.to_string()),
        (None, None, None) => OwnerIdStatus::Missing,
    };

    if let Some(warning) = owner.warning() {
        warn!("{}", warning);
    }

    ResolvedConfig {
        base_url,
        owner,
        timeout: Duration::from_millis(settings.api.timeout_ms),
        ui: settings.ui.clone(),
    }
}

/// Owner ids must be positive integers
fn validate_owner_id(raw: &str) -> OwnerIdStatus {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return OwnerIdStatus::Missing;
    }
    match trimmed.parse::<u64>() {
        Ok(id) if id > 0 => OwnerIdStatus::Valid(id),
        _ => OwnerIdStatus::Invalid(trimmed.to_string()),
    }
}
