//! Header draft and row editor handlers

use taskdeck_core::ErrorKind;

use crate::message::Message;
use crate::state::{AppState, Focus, RowEditor};

use super::UpdateResult;

// ─────────────────────────────────────────────────────────
// Header draft
// ─────────────────────────────────────────────────────────

pub fn handle_header_input(state: &mut AppState, c: char) -> UpdateResult {
    // Input is disabled while an add is in flight
    if !state.add_in_flight {
        state.header.draft.push(c);
    }
    UpdateResult::none()
}

pub fn handle_header_backspace(state: &mut AppState) -> UpdateResult {
    if !state.add_in_flight {
        state.header.draft.pop();
    }
    UpdateResult::none()
}

pub fn handle_header_clear(state: &mut AppState) -> UpdateResult {
    if !state.add_in_flight {
        state.header.draft.clear();
    }
    UpdateResult::none()
}

/// Reject blank drafts, add everything else. The draft itself is only cleared
/// by the reset signal once the add succeeds.
pub fn handle_submit_draft(state: &mut AppState) -> UpdateResult {
    if state.add_in_flight {
        return UpdateResult::none();
    }

    let title = state.header.draft.trim();
    if title.is_empty() {
        return UpdateResult::message(Message::RaiseError(ErrorKind::EmptyTitle));
    }

    UpdateResult::message(Message::AddItem {
        title: title.to_string(),
    })
}

// ─────────────────────────────────────────────────────────
// Row editor
// ─────────────────────────────────────────────────────────

pub fn handle_start_editing(state: &mut AppState) -> UpdateResult {
    if state.focus != Focus::List || state.editor.is_some() {
        return UpdateResult::none();
    }

    if let Some(item) = state.selected_item() {
        let editor = RowEditor {
            id: item.id,
            draft: item.title.clone(),
        };
        state.editor = Some(editor);
    }
    UpdateResult::none()
}

pub fn handle_editor_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(editor) = state.editor.as_mut() {
        editor.draft.push(c);
    }
    UpdateResult::none()
}

pub fn handle_editor_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(editor) = state.editor.as_mut() {
        editor.draft.pop();
    }
    UpdateResult::none()
}

/// Leave edit mode, returning the mutation the draft implies
///
/// - blank draft deletes the item
/// - draft equal to the committed title does nothing
/// - anything else renames the item
pub fn commit_editor(state: &mut AppState) -> Option<Message> {
    let editor = state.editor.take()?;
    let item = state.item(editor.id)?;
    let title = editor.draft.trim();

    if title.is_empty() {
        Some(Message::DeleteItem { id: editor.id })
    } else if title == item.title {
        None
    } else {
        Some(Message::EditItem {
            id: editor.id,
            title: title.to_string(),
        })
    }
}
