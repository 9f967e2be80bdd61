//! taskdeck-app - Application state and orchestration for taskdeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`handler::update`] the reducer, and
//! [`UpdateAction`]s the side effects executed against the remote item store
//! by the [`Engine`]. Configuration loading lives here as well.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod requests;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Focus, LoadPhase};
