//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function and
//! dispatches the resulting actions.

use std::sync::Arc;

use tokio::sync::mpsc;

use taskdeck_remote::ItemStore;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    store: &Arc<S>,
) where
    S: ItemStore + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), store.clone());
        }

        msg = result.message;
    }
}
