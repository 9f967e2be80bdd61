//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focus
//! - `items`: Item mutation handlers and their settlements
//! - `editor`: Header draft and row editor handlers
//! - `errors`: Error banner raise/show/clear

pub(crate) mod editor;
pub(crate) mod errors;
pub(crate) mod items;
pub(crate) mod keys;
pub(crate) mod update;


use std::time::Duration;

use taskdeck_core::{ErrorKind, ItemId, ItemPatch, NewItem};

use crate::message::Message;
use crate::requests::RequestSeq;

// Re-export main entry point
pub use update::update;

/// How long an error stays visible
pub const ERROR_DISPLAY_DURATION: Duration = Duration::from_millis(3000);

/// Delay between a remote failure and its error becoming visible
pub const ERROR_RAISE_DELAY: Duration = Duration::from_millis(300);

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Fetch the full collection for the configured owner
    LoadItems,

    /// Create an item on the remote store
    CreateItem { item: NewItem },

    /// Patch one field of an item
    UpdateItem {
        id: ItemId,
        seq: RequestSeq,
        patch: ItemPatch,
    },

    /// Delete an item
    DeleteItem { id: ItemId, seq: RequestSeq },

    /// Send `Message::ShowError(kind)` after `delay`
    RaiseErrorAfter { kind: ErrorKind, delay: Duration },

    /// Send `Message::ClearError { token }` after `delay`
    ClearErrorAfter { token: u64, delay: Duration },

    /// Several independent actions (toggle all, clear completed)
    Batch(Vec<UpdateAction>),
}

impl UpdateAction {
    /// Flatten nested batches into a list of single actions
    pub fn flatten(self) -> Vec<UpdateAction> {
        match self {
            UpdateAction::Batch(actions) => {
                actions.into_iter().flat_map(UpdateAction::flatten).collect()
            }
            action => vec![action],
        }
    }
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
