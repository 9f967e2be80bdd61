//! Main TUI runner - entry point and event loop

use taskdeck_app::config::ResolvedConfig;
use taskdeck_app::{AppState, Engine};
use taskdeck_core::prelude::*;
use taskdeck_remote::{HttpItemStore, ItemStore};

use crate::{event, render, terminal};

/// Run the TUI against the configured item store
pub async fn run(config: ResolvedConfig) -> Result<()> {
    let owner_id = config.owner.owner_id().unwrap_or_default();
    let store = HttpItemStore::new(&config.base_url, owner_id, config.timeout)
        .context("Failed to build item store client")?;
    info!(
        "Using item store at {} for owner {}",
        store.base_url(),
        store.owner_id()
    );

    let mut engine = Engine::new(AppState::from_config(&config), store);

    // Install panic hook for terminal restoration
    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::terminal_init(e.to_string()))?;

    engine.start();
    let result = run_loop(&mut term, &mut engine);

    ratatui::restore();
    info!("taskdeck exiting");
    result
}

/// Main event loop
fn run_loop<S>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<S>) -> Result<()>
where
    S: ItemStore + Sync + 'static,
{
    while !engine.should_quit() {
        // Results of background requests, timers and signals
        engine.drain_pending();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
