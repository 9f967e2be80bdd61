//! Error banner lifecycle
//!
//! Remote failures become visible after [`ERROR_RAISE_DELAY`]; local
//! validation errors are shown at once. Each shown error gets a fresh token
//! and a clear timer armed for that token, so a timer left over from an
//! earlier error never clears a newer one.

use taskdeck_core::ErrorKind;

use crate::message::Message;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult, ERROR_DISPLAY_DURATION, ERROR_RAISE_DELAY};

pub fn handle_raise_error(kind: ErrorKind) -> UpdateResult {
    if kind.is_remote() {
        UpdateResult::action(UpdateAction::RaiseErrorAfter {
            kind,
            delay: ERROR_RAISE_DELAY,
        })
    } else {
        UpdateResult::message(Message::ShowError(kind))
    }
}

pub fn handle_show_error(state: &mut AppState, kind: ErrorKind) -> UpdateResult {
    state.error = Some(kind);
    state.error_token = state.error_token.wrapping_add(1);

    UpdateResult::action(UpdateAction::ClearErrorAfter {
        token: state.error_token,
        delay: ERROR_DISPLAY_DURATION,
    })
}

pub fn handle_clear_error(state: &mut AppState, token: u64) -> UpdateResult {
    if token == state.error_token {
        state.error = None;
    }
    UpdateResult::none()
}
