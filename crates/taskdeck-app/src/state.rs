//! Application state (Model in TEA pattern)

use taskdeck_core::{filter_items, ErrorKind, FilterMode, Item, ItemId, OwnerId};

use crate::config::{ResolvedConfig, UiSettings};
use crate::requests::RequestTracker;

/// Which panel receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// New-item input in the header panel
    #[default]
    Header,
    /// Item rows in the list panel
    List,
}

/// Progress of the one-time startup load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    NotStarted,
    Loading,
    Ready,
    Failed,
}

/// New-item input owned by the header panel
#[derive(Debug, Clone, Default)]
pub struct HeaderState {
    pub draft: String,
    /// Last reset signal value this input has reacted to
    reset_seen: u64,
}

impl HeaderState {
    /// Clear the draft when the reset signal changed since the last call
    pub fn observe_reset(&mut self, signal: u64) {
        if signal != self.reset_seen {
            self.reset_seen = signal;
            self.draft.clear();
        }
    }
}

/// Inline editor of the row being renamed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEditor {
    pub id: ItemId,
    /// Independent copy seeded from the committed title
    pub draft: String,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Single source of truth for rendering, in store order
    pub items: Vec<Item>,

    pub filter: FilterMode,

    /// At most one visible error
    pub error: Option<ErrorKind>,

    /// Incremented each time an error is shown; clear timers carry it
    pub(crate) error_token: u64,

    /// Changes (value irrelevant) whenever the header input should clear
    pub reset_signal: u64,

    /// A create request is in flight
    pub add_in_flight: bool,

    /// Title rendered in the placeholder row while adding
    pub pending_title: Option<String>,

    pub requests: RequestTracker,

    pub load_phase: LoadPhase,

    pub focus: Focus,

    pub header: HeaderState,

    pub editor: Option<RowEditor>,

    /// Index into the filtered view
    pub selected: usize,

    /// Owner of every created item
    pub owner_id: OwnerId,

    /// Set when the owner id is unusable; the app then only shows this text
    pub config_warning: Option<String>,

    pub ui: UiSettings,

    /// Spinner animation frame, advanced by ticks
    pub spinner_frame: usize,

    quitting: bool,
}

impl AppState {
    pub fn new(owner_id: OwnerId) -> Self {
        Self {
            items: Vec::new(),
            filter: FilterMode::All,
            error: None,
            error_token: 0,
            reset_signal: 0,
            add_in_flight: false,
            pending_title: None,
            requests: RequestTracker::new(),
            load_phase: LoadPhase::NotStarted,
            focus: Focus::Header,
            header: HeaderState::default(),
            editor: None,
            selected: 0,
            owner_id,
            config_warning: None,
            ui: UiSettings::default(),
            spinner_frame: 0,
            quitting: false,
        }
    }

    /// Build state from resolved configuration; an unusable owner id puts the
    /// app into the configuration-warning view
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut state = Self::new(config.owner.owner_id().unwrap_or(0));
        state.config_warning = config.owner.warning();
        state.ui = config.ui.clone();
        state
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn quit(&mut self) {
        self.quitting = true;
    }

    // ─────────────────────────────────────────────────────────
    // Derived view data
    // ─────────────────────────────────────────────────────────

    /// The filtered view, re-derived on every call
    pub fn visible_items(&self) -> Vec<&Item> {
        filter_items(&self.items, self.filter)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.visible_items().get(self.selected).copied()
    }

    /// The id-0 row shown after the filtered view while an add is in flight
    pub fn placeholder_item(&self) -> Option<Item> {
        self.pending_title.as_deref().map(Item::placeholder)
    }

    pub fn is_loading(&self, id: ItemId) -> bool {
        self.requests.is_loading(id)
    }

    /// Toggle-all indicator: every item of the filtered view is completed
    pub fn all_visible_completed(&self) -> bool {
        self.visible_items().iter().all(|item| item.completed)
    }

    /// Number of items not yet completed
    pub fn remaining_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    pub fn has_completed(&self) -> bool {
        self.items.iter().any(|item| item.completed)
    }

    pub fn error_token(&self) -> u64 {
        self.error_token
    }

    /// Keep the selection inside the filtered view
    pub fn clamp_selection(&mut self) {
        let len = self.visible_items().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Advance the spinner animation
    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OwnerIdStatus, UiSettings};
    use std::time::Duration;

    fn item(id: ItemId, completed: bool) -> Item {
        Item {
            id,
            user_id: 1,
            title: format!("item {}", id),
            completed,
        }
    }

    #[test]
    fn test_header_reset_clears_only_on_change() {
        let mut header = HeaderState {
            draft: "typed".to_string(),
            ..HeaderState::default()
        };

        header.observe_reset(0);
        assert_eq!(header.draft, "typed");

        header.observe_reset(1);
        assert!(header.draft.is_empty());

        header.draft.push_str("again");
        header.observe_reset(1);
        assert_eq!(header.draft, "again");
    }

    #[test]
    fn test_derived_counts() {
        let mut state = AppState::new(1);
        state.items = vec![item(1, false), item(2, true), item(3, false)];

        assert_eq!(state.remaining_count(), 2);
        assert!(state.has_completed());
        assert!(!state.all_visible_completed());

        state.filter = FilterMode::Completed;
        assert!(state.all_visible_completed());
    }

    #[test]
    fn test_all_visible_completed_on_empty_view() {
        let state = AppState::new(1);
        assert!(state.all_visible_completed());
    }

    #[test]
    fn test_placeholder_item_follows_pending_title() {
        let mut state = AppState::new(3);
        assert!(state.placeholder_item().is_none());

        state.pending_title = Some("Buy milk".to_string());
        let placeholder = state.placeholder_item().unwrap();
        assert_eq!(placeholder.id, taskdeck_core::PLACEHOLDER_ID);
        assert_eq!(placeholder.title, "Buy milk");
        assert!(!placeholder.completed);
    }

    #[test]
    fn test_clamp_selection() {
        let mut state = AppState::new(1);
        state.items = vec![item(1, false), item(2, true)];
        state.selected = 5;
        state.clamp_selection();
        assert_eq!(state.selected, 1);

        state.filter = FilterMode::Active;
        state.clamp_selection();
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_item().map(|i| i.id), Some(1));
    }

    #[test]
    fn test_from_config_with_missing_owner() {
        let config = ResolvedConfig {
            base_url: "http://localhost".to_string(),
            owner: OwnerIdStatus::Missing,
            timeout: Duration::from_secs(1),
            ui: UiSettings::default(),
        };
        let state = AppState::from_config(&config);
        assert!(state.config_warning.is_some());
        assert_eq!(state.owner_id, 0);
    }

    #[test]
    fn test_from_config_with_valid_owner() {
        let config = ResolvedConfig {
            base_url: "http://localhost".to_string(),
            owner: OwnerIdStatus::Valid(12),
            timeout: Duration::from_secs(1),
            ui: UiSettings {
                show_key_hints: false,
            },
        };
        let state = AppState::from_config(&config);
        assert!(state.config_warning.is_none());
        assert_eq!(state.owner_id, 12);
        assert!(!state.ui.show_key_hints);
    }
}
