//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Each remote call runs on its own tokio task and always reports back with
//! exactly one settlement message, success or failure. Nothing is cancelled
//! once spawned.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use taskdeck_core::prelude::*;
use taskdeck_core::{ItemField, ItemId, ItemPatch, NewItem};
use taskdeck_remote::ItemStore;

use crate::message::Message;
use crate::requests::RequestSeq;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, store: Arc<S>)
where
    S: ItemStore + Sync + 'static,
{
    match action {
        UpdateAction::LoadItems => {
            tokio::spawn(async move {
                let msg = load_items(store.as_ref()).await;
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::CreateItem { item } => {
            tokio::spawn(async move {
                let msg = create_item(store.as_ref(), item).await;
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::UpdateItem { id, seq, patch } => {
            tokio::spawn(async move {
                let msg = update_item(store.as_ref(), id, seq, patch).await;
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::DeleteItem { id, seq } => {
            tokio::spawn(async move {
                let msg = delete_item(store.as_ref(), id, seq).await;
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::RaiseErrorAfter { kind, delay } => {
            spawn_delayed(msg_tx, delay, Message::ShowError(kind));
        }

        UpdateAction::ClearErrorAfter { token, delay } => {
            spawn_delayed(msg_tx, delay, Message::ClearError { token });
        }

        UpdateAction::Batch(actions) => {
            for action in actions {
                handle_action(action, msg_tx.clone(), store.clone());
            }
        }
    }
}

async fn load_items<S: ItemStore>(store: &S) -> Message {
    debug!("Loading items");
    match store.list().await {
        Ok(items) => Message::ItemsLoaded { items },
        Err(e) => Message::ItemsLoadFailed {
            error: log_failure("load", &e),
        },
    }
}

async fn create_item<S: ItemStore>(store: &S, item: NewItem) -> Message {
    debug!("Creating item {:?}", item.title);
    match store.create(item).await {
        Ok(item) => Message::ItemAdded { item },
        Err(e) => Message::ItemAddFailed {
            error: log_failure("create", &e),
        },
    }
}

async fn update_item<S: ItemStore>(
    store: &S,
    id: ItemId,
    seq: RequestSeq,
    patch: ItemPatch,
) -> Message {
    debug!("Updating item {} (#{}) with {:?}", id, seq, patch);
    let field: ItemField = patch.field();
    match store.update(id, patch.clone()).await {
        Ok(()) => Message::ItemUpdated { id, seq, patch },
        Err(e) => Message::ItemUpdateFailed {
            id,
            seq,
            field,
            error: log_failure("update", &e),
        },
    }
}

async fn delete_item<S: ItemStore>(store: &S, id: ItemId, seq: RequestSeq) -> Message {
    debug!("Deleting item {} (#{})", id, seq);
    match store.delete(id).await {
        Ok(()) => Message::ItemDeleted { id, seq },
        Err(e) => Message::ItemDeleteFailed {
            id,
            seq,
            error: log_failure("delete", &e),
        },
    }
}

/// Log a failed store call and return its message for the settlement
fn log_failure(op: &str, e: &Error) -> String {
    if e.is_recoverable() {
        warn!("Store {} failed: {}", op, e);
    } else {
        error!("Store {} failed: {}", op, e);
    }
    e.to_string()
}

/// Timers are never cancelled; the reducer ignores the ones that are stale
fn spawn_delayed(msg_tx: mpsc::Sender<Message>, delay: Duration, msg: Message) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        send(&msg_tx, msg).await;
    });
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        // Receiver dropped during shutdown
        debug!("Message channel closed, dropping result");
    }
}
