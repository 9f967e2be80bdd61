//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `items`: load, add, edit, toggle, delete and their settlements
//! - `editor`: header draft and row editor
//! - `errors`: error banner lifecycle
//! - `keys`: key to message mapping

use taskdeck_core::prelude::*;

use crate::message::Message;
use crate::state::{AppState, Focus};

use super::{editor, errors, items, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    let result = dispatch(state, message);

    // Derived bookkeeping that every transition must respect
    state.header.observe_reset(state.reset_signal);
    state.clamp_selection();
    close_hidden_editor(state);

    result
}

/// Drop the row editor once its item leaves the filtered view.
///
/// The draft is discarded: the row is no longer drawn, so nothing the user
/// typed into it can be submitted.
fn close_hidden_editor(state: &mut AppState) {
    let hidden = match &state.editor {
        Some(editor) => !state.visible_items().iter().any(|item| item.id == editor.id),
        None => false,
    };
    if hidden {
        debug!("Closing editor for item that left the filtered view");
        state.editor = None;
    }
}

fn dispatch(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Item Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadItems => items::handle_load_items(state),
        Message::ItemsLoaded { items } => items::handle_items_loaded(state, items),
        Message::ItemsLoadFailed { error } => items::handle_items_load_failed(state, error),

        Message::AddItem { title } => items::handle_add_item(state, title),
        Message::ItemAdded { item } => items::handle_item_added(state, item),
        Message::ItemAddFailed { error } => items::handle_item_add_failed(state, error),

        Message::EditItem { id, title } => items::handle_edit_item(state, id, title),
        Message::ToggleItem { id } => items::handle_toggle_item(state, id),
        Message::ToggleAll => items::handle_toggle_all(state),
        Message::DeleteItem { id } => items::handle_delete_item(state, id),
        Message::DeleteAllCompleted => items::handle_delete_all_completed(state),

        Message::ItemUpdated { id, seq, patch } => {
            items::handle_item_updated(state, id, seq, patch)
        }
        Message::ItemUpdateFailed {
            id,
            seq,
            field,
            error,
        } => items::handle_item_update_failed(state, id, seq, field, error),
        Message::ItemDeleted { id, seq } => items::handle_item_deleted(state, id, seq),
        Message::ItemDeleteFailed { id, seq, error } => {
            items::handle_item_delete_failed(state, id, seq, error)
        }

        // ─────────────────────────────────────────────────────────
        // Filter Messages
        // ─────────────────────────────────────────────────────────
        Message::SetFilter(mode) => {
            let follow_up = editor::commit_editor(state);
            state.filter = mode;
            state.selected = 0;
            UpdateResult {
                message: follow_up,
                action: None,
            }
        }

        Message::CycleFilter => {
            let next = state.filter.next();
            UpdateResult::message(Message::SetFilter(next))
        }

        // ─────────────────────────────────────────────────────────
        // Error Messages
        // ─────────────────────────────────────────────────────────
        Message::RaiseError(kind) => errors::handle_raise_error(kind),
        Message::ShowError(kind) => errors::handle_show_error(state, kind),
        Message::ClearError { token } => errors::handle_clear_error(state, token),
        Message::DismissError => {
            state.error = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Header Messages
        // ─────────────────────────────────────────────────────────
        Message::HeaderInput(c) => editor::handle_header_input(state, c),
        Message::HeaderBackspace => editor::handle_header_backspace(state),
        Message::HeaderClear => editor::handle_header_clear(state),
        Message::SubmitDraft => editor::handle_submit_draft(state),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectPrevious => {
            let follow_up = editor::commit_editor(state);
            state.selected = state.selected.saturating_sub(1);
            UpdateResult {
                message: follow_up,
                action: None,
            }
        }

        Message::SelectNext => {
            let follow_up = editor::commit_editor(state);
            let len = state.visible_items().len();
            if state.selected + 1 < len {
                state.selected += 1;
            }
            UpdateResult {
                message: follow_up,
                action: None,
            }
        }

        Message::SelectFirst => {
            state.selected = 0;
            UpdateResult::none()
        }

        Message::SelectLast => {
            state.selected = state.visible_items().len().saturating_sub(1);
            UpdateResult::none()
        }

        Message::FocusHeader => {
            let follow_up = editor::commit_editor(state);
            state.focus = Focus::Header;
            UpdateResult {
                message: follow_up,
                action: None,
            }
        }

        Message::FocusList => {
            state.focus = Focus::List;
            UpdateResult::none()
        }

        Message::ToggleSelected => match state.selected_item() {
            Some(item) => UpdateResult::message(Message::ToggleItem { id: item.id }),
            None => UpdateResult::none(),
        },

        Message::DeleteSelected => match state.selected_item() {
            Some(item) => UpdateResult::message(Message::DeleteItem { id: item.id }),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Row Editor Messages
        // ─────────────────────────────────────────────────────────
        Message::StartEditing => editor::handle_start_editing(state),
        Message::EditorInput(c) => editor::handle_editor_input(state, c),
        Message::EditorBackspace => editor::handle_editor_backspace(state),
        Message::SubmitEdit => UpdateResult {
            message: editor::commit_editor(state),
            action: None,
        },
        Message::CancelEdit => {
            state.editor = None;
            UpdateResult::none()
        }
    }
}
