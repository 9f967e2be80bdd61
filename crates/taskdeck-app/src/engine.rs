//! Engine - owns the TEA state, the message channel and the item store
//!
//! The TUI runner feeds key events and ticks into the engine, drains the
//! results of background tasks, and renders `engine.state` after each cycle.

use std::sync::Arc;

use tokio::sync::mpsc;

use taskdeck_core::prelude::*;
use taskdeck_remote::ItemStore;

use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Message channel capacity
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for taskdeck.
pub struct Engine<S> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the message channel.
    /// Clone this to give to input sources (signal handler, background tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the message channel.
    msg_rx: mpsc::Receiver<Message>,

    store: Arc<S>,
}

impl<S> Engine<S>
where
    S: ItemStore + Sync + 'static,
{
    pub fn new(state: AppState, store: S) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
        Self {
            state,
            msg_tx,
            msg_rx,
            store: Arc::new(store),
        }
    }

    /// Install the signal handler and issue the startup load.
    ///
    /// With an unusable configuration nothing is loaded.
    pub fn start(&mut self) {
        signals::spawn_signal_handler(self.msg_tx.clone());

        if let Some(warning) = &self.state.config_warning {
            warn!("Not contacting the item store: {}", warning);
            return;
        }
        self.process_message(Message::LoadItems);
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.store);
    }

    /// Process every message already waiting in the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from background tasks or signals
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}
