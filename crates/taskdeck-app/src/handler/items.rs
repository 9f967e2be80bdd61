//! Item mutation handlers
//!
//! Every remote mutation is issued as an [`UpdateAction`] and settles through a
//! result message. Settlement always releases the request's loading slot; the
//! result is applied only while it is still the newest for its item field and
//! the item still exists.

use taskdeck_core::prelude::*;
use taskdeck_core::{ErrorKind, Item, ItemField, ItemId, ItemPatch, NewItem};

use crate::message::Message;
use crate::requests::RequestSeq;
use crate::state::{AppState, Focus, LoadPhase};

use super::{UpdateAction, UpdateResult};

// ─────────────────────────────────────────────────────────
// Startup load
// ─────────────────────────────────────────────────────────

/// Start the one-time load; repeated requests are ignored
pub fn handle_load_items(state: &mut AppState) -> UpdateResult {
    if state.load_phase != LoadPhase::NotStarted || state.config_warning.is_some() {
        return UpdateResult::none();
    }
    state.load_phase = LoadPhase::Loading;
    UpdateResult::action(UpdateAction::LoadItems)
}

pub fn handle_items_loaded(state: &mut AppState, items: Vec<Item>) -> UpdateResult {
    info!("Loaded {} items", items.len());
    state.items = items;
    state.load_phase = LoadPhase::Ready;
    UpdateResult::none()
}

pub fn handle_items_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Failed to load items: {}", error);
    state.load_phase = LoadPhase::Failed;
    UpdateResult::message(Message::RaiseError(ErrorKind::LoadFailed))
}

// ─────────────────────────────────────────────────────────
// Add
// ─────────────────────────────────────────────────────────

pub fn handle_add_item(state: &mut AppState, title: String) -> UpdateResult {
    if state.add_in_flight {
        debug!("Ignoring add while another add is in flight");
        return UpdateResult::none();
    }

    state.add_in_flight = true;
    state.pending_title = Some(title.clone());

    UpdateResult::action(UpdateAction::CreateItem {
        item: NewItem::new(title, state.owner_id),
    })
}

pub fn handle_item_added(state: &mut AppState, item: Item) -> UpdateResult {
    debug!("Item {} created", item.id);
    state.items.push(item);
    state.reset_signal = state.reset_signal.wrapping_add(1);
    finish_add(state);
    UpdateResult::none()
}

pub fn handle_item_add_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Failed to add item: {}", error);
    finish_add(state);
    UpdateResult::message(Message::RaiseError(ErrorKind::AddFailed))
}

/// Cleanup shared by both add outcomes
fn finish_add(state: &mut AppState) {
    state.add_in_flight = false;
    state.pending_title = None;
    if state.editor.is_none() {
        state.focus = Focus::Header;
    }
}

// ─────────────────────────────────────────────────────────
// Edit / toggle
// ─────────────────────────────────────────────────────────

pub fn handle_edit_item(state: &mut AppState, id: ItemId, title: String) -> UpdateResult {
    if state.item(id).is_none() {
        warn!("Edit requested for unknown item {}", id);
        return UpdateResult::none();
    }
    let action = update_action(state, id, ItemPatch::Title(title));
    UpdateResult::action(action)
}

pub fn handle_toggle_item(state: &mut AppState, id: ItemId) -> UpdateResult {
    match toggle_action(state, id) {
        Some(action) => UpdateResult::action(action),
        None => UpdateResult::none(),
    }
}

/// One independent toggle per current item
pub fn handle_toggle_all(state: &mut AppState) -> UpdateResult {
    let ids: Vec<ItemId> = state.items.iter().map(|item| item.id).collect();
    let actions: Vec<UpdateAction> = ids
        .into_iter()
        .filter_map(|id| toggle_action(state, id))
        .collect();

    if actions.is_empty() {
        UpdateResult::none()
    } else {
        UpdateResult::action(UpdateAction::Batch(actions))
    }
}

/// Toggle sends the explicit target value computed at issue time
fn toggle_action(state: &mut AppState, id: ItemId) -> Option<UpdateAction> {
    let target = !state.item(id)?.completed;
    Some(update_action(state, id, ItemPatch::Completed(target)))
}

fn update_action(state: &mut AppState, id: ItemId, patch: ItemPatch) -> UpdateAction {
    let seq = state.requests.begin(id, Some(patch.field()));
    UpdateAction::UpdateItem { id, seq, patch }
}

pub fn handle_item_updated(
    state: &mut AppState,
    id: ItemId,
    seq: RequestSeq,
    patch: ItemPatch,
) -> UpdateResult {
    if !state.requests.settle(id, Some(patch.field()), seq) {
        debug!("Dropping stale update #{} for item {}", seq, id);
        return UpdateResult::none();
    }

    match state.item_mut(id) {
        Some(item) => item.apply(&patch),
        None => debug!("Item {} was removed before its update settled", id),
    }
    UpdateResult::none()
}

pub fn handle_item_update_failed(
    state: &mut AppState,
    id: ItemId,
    seq: RequestSeq,
    field: ItemField,
    error: String,
) -> UpdateResult {
    warn!("Failed to update item {}: {}", id, error);
    state.requests.settle(id, Some(field), seq);
    UpdateResult::message(Message::RaiseError(ErrorKind::UpdateFailed))
}

// ─────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────

pub fn handle_delete_item(state: &mut AppState, id: ItemId) -> UpdateResult {
    match delete_action(state, id) {
        Some(action) => UpdateResult::action(action),
        None => UpdateResult::none(),
    }
}

/// One independent delete per currently-completed item
pub fn handle_delete_all_completed(state: &mut AppState) -> UpdateResult {
    let ids: Vec<ItemId> = state
        .items
        .iter()
        .filter(|item| item.completed)
        .map(|item| item.id)
        .collect();
    let actions: Vec<UpdateAction> = ids
        .into_iter()
        .filter_map(|id| delete_action(state, id))
        .collect();

    if actions.is_empty() {
        UpdateResult::none()
    } else {
        UpdateResult::action(UpdateAction::Batch(actions))
    }
}

fn delete_action(state: &mut AppState, id: ItemId) -> Option<UpdateAction> {
    state.item(id)?;
    let seq = state.requests.begin(id, None);
    Some(UpdateAction::DeleteItem { id, seq })
}

pub fn handle_item_deleted(state: &mut AppState, id: ItemId, seq: RequestSeq) -> UpdateResult {
    state.requests.settle(id, None, seq);
    state.items.retain(|item| item.id != id);
    if state.editor.as_ref().is_some_and(|editor| editor.id == id) {
        state.editor = None;
    }
    state.reset_signal = state.reset_signal.wrapping_add(1);
    debug!("Item {} deleted", id);
    UpdateResult::none()
}

pub fn handle_item_delete_failed(
    state: &mut AppState,
    id: ItemId,
    seq: RequestSeq,
    error: String,
) -> UpdateResult {
    warn!("Failed to delete item {}: {}", id, error);
    state.requests.settle(id, None, seq);
    UpdateResult::message(Message::RaiseError(ErrorKind::DeleteFailed))
}
