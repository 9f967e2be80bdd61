//! Configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};
use taskdeck_core::OwnerId;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Remote item store settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL; `/todos` is appended per request
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Owner id scoping every request. Must be positive.
    #[serde(default)]
    pub user_id: Option<i64>,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_id: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the key binding hint line under the footer
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_key_hints: true,
        }
    }
}

fn default_base_url() -> String {
    "https://mate.academy/students-api".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_true() -> bool {
    true
}

/// Overrides collected from the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub user_id: Option<u64>,
}

/// Outcome of owner id validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerIdStatus {
    Valid(OwnerId),
    /// No owner id configured anywhere
    Missing,
    /// A value was configured but is not a positive integer
    Invalid(String),
}

impl OwnerIdStatus {
    pub fn owner_id(&self) -> Option<OwnerId> {
        match self {
            OwnerIdStatus::Valid(id) => Some(*id),
            _ => None,
        }
    }

    /// Text for the configuration warning view, `None` when valid
    pub fn warning(&self) -> Option<String> {
        match self {
            OwnerIdStatus::Valid(_) => None,
            OwnerIdStatus::Missing => Some(
                "No user id configured. Set api.user_id in config.toml, \
                 TASKDECK_USER_ID, or pass --user-id."
                    .to_string(),
            ),
            OwnerIdStatus::Invalid(raw) => Some(format!(
                "Invalid user id {:?}: expected a positive integer.",
                raw
            )),
        }
    }
}

/// Settings after applying environment and CLI overrides
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub owner: OwnerIdStatus,
    pub timeout: Duration,
    pub ui: UiSettings,
}
