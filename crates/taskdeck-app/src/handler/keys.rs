//! Key event handlers for each focus

use taskdeck_core::FilterMode;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on current focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.config_warning.is_some() {
        return handle_key_config_warning(key);
    }

    if state.editor.is_some() {
        return handle_key_editing(key);
    }

    match state.focus {
        Focus::Header => handle_key_header(key),
        Focus::List => handle_key_list(key),
    }
}

/// Only quitting is possible while the configuration is unusable
fn handle_key_config_warning(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::Enter => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the new-item input
fn handle_key_header(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitDraft),
        InputKey::Backspace => Some(Message::HeaderBackspace),
        InputKey::CharCtrl('u') => Some(Message::HeaderClear),
        InputKey::CharCtrl('t') => Some(Message::ToggleAll),

        InputKey::Tab | InputKey::Down | InputKey::Esc => Some(Message::FocusList),

        InputKey::Char(c) => Some(Message::HeaderInput(c)),
        _ => None,
    }
}

/// Handle key events on the selected row
fn handle_key_list(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // Selection
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),

        // Row actions
        InputKey::Char(' ') => Some(Message::ToggleSelected),
        InputKey::Enter | InputKey::Char('e') => Some(Message::StartEditing),
        InputKey::Char('d') | InputKey::Delete => Some(Message::DeleteSelected),

        // Bulk actions
        InputKey::Char('a') => Some(Message::ToggleAll),
        InputKey::Char('c') => Some(Message::DeleteAllCompleted),

        // Filter
        InputKey::Char('1') => Some(Message::SetFilter(FilterMode::All)),
        InputKey::Char('2') => Some(Message::SetFilter(FilterMode::Active)),
        InputKey::Char('3') => Some(Message::SetFilter(FilterMode::Completed)),
        InputKey::Char('f') => Some(Message::CycleFilter),

        InputKey::Char('x') => Some(Message::DismissError),

        InputKey::Tab | InputKey::BackTab | InputKey::Char('i') => Some(Message::FocusHeader),
        _ => None,
    }
}

/// Handle key events while a row title is being edited
///
/// Moving away from the row (Up/Down/Tab) submits the draft first.
fn handle_key_editing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitEdit),
        InputKey::Esc => Some(Message::CancelEdit),
        InputKey::Backspace => Some(Message::EditorBackspace),

        InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Down => Some(Message::SelectNext),
        InputKey::Tab | InputKey::BackTab => Some(Message::FocusHeader),

        InputKey::Char(c) => Some(Message::EditorInput(c)),
        _ => None,
    }
}
