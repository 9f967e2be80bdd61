//! taskdeck - A terminal client for a remote todo list
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};
use tracing::info;

use taskdeck_app::config::{self, Overrides};

/// taskdeck - A terminal client for a remote todo list
#[derive(Parser, Debug)]
#[command(name = "taskdeck")]
#[command(about = "A terminal client for a remote todo list", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the item store (overrides TASKDECK_API_URL and the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Owner id for every request (overrides TASKDECK_USER_ID and the config file)
    #[arg(long, value_name = "ID")]
    user_id: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Write a commented default config file if none exists
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config_path = args
        .config
        .clone()
        .or_else(config::default_config_path)
        .ok_or_else(|| eyre!("Could not determine the config directory, pass --config"))?;

    if args.command == Some(Command::InitConfig) {
        if config::init_config_file(&config_path)? {
            println!("Wrote default config to {}", config_path.display());
        } else {
            println!("Config already exists at {}", config_path.display());
        }
        return Ok(());
    }

    taskdeck_core::logging::init()?;
    info!("taskdeck starting with config {}", config_path.display());

    let settings = config::load_settings(&config_path);
    let overrides = Overrides {
        api_url: args.api_url,
        user_id: args.user_id,
    };
    let resolved = config::resolve(&settings, &overrides);

    taskdeck_tui::run(resolved).await?;
    Ok(())
}
