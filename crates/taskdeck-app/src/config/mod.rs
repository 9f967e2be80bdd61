//! Configuration for taskdeck
//!
//! Supports:
//! - `<config_dir>/taskdeck/config.toml` - Store location, owner id, UI options
//! - `TASKDECK_API_URL` / `TASKDECK_USER_ID` environment overrides
//! - CLI overrides (highest priority), passed in as [`Overrides`]

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, resolve};
pub use types::*;
