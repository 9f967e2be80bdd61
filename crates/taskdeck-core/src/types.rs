//! Core domain types for taskdeck

use serde::{Deserialize, Serialize};

/// Server-assigned item identifier
pub type ItemId = u64;

/// Identifier of the user that owns every item this client sees
pub type OwnerId = u64;

/// Id reserved for the transient row shown while a create request is in flight.
/// Never sent to or returned by the store.
pub const PLACEHOLDER_ID: ItemId = 0;

// ─────────────────────────────────────────────────────────────────────────────
// Item
// ─────────────────────────────────────────────────────────────────────────────

/// A single task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub user_id: OwnerId,
    pub title: String,
    pub completed: bool,
}

impl Item {
    /// The non-persisted row rendered while an add is pending
    pub fn placeholder(title: impl Into<String>) -> Self {
        Self {
            id: PLACEHOLDER_ID,
            user_id: 0,
            title: title.into(),
            completed: false,
        }
    }

    /// Apply a successful partial update to this item
    pub fn apply(&mut self, patch: &ItemPatch) {
        match patch {
            ItemPatch::Title(title) => self.title.clone_from(title),
            ItemPatch::Completed(completed) => self.completed = *completed,
        }
    }
}

/// Creation payload: an item without an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub title: String,
    pub user_id: OwnerId,
    pub completed: bool,
}

impl NewItem {
    /// New items always start incomplete
    pub fn new(title: impl Into<String>, user_id: OwnerId) -> Self {
        Self {
            title: title.into(),
            user_id,
            completed: false,
        }
    }
}

/// Field touched by a partial update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Title,
    Completed,
}

/// Partial update of a single item field.
///
/// Serializes to the wire body, e.g. `{"title":"Buy milk"}` or `{"completed":true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemPatch {
    Title(String),
    Completed(bool),
}

impl ItemPatch {
    pub fn field(&self) -> ItemField {
        match self {
            ItemPatch::Title(_) => ItemField::Title,
            ItemPatch::Completed(_) => ItemField::Completed,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Filtering
// ─────────────────────────────────────────────────────────────────────────────

/// Client-side view filter. Never persisted remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub const ALL_MODES: [FilterMode; 3] =
        [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    /// Cycle All → Active → Completed → All
    pub fn next(self) -> Self {
        match self {
            FilterMode::All => FilterMode::Active,
            FilterMode::Active => FilterMode::Completed,
            FilterMode::Completed => FilterMode::All,
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !item.completed,
            FilterMode::Completed => item.completed,
        }
    }
}

/// Derive the visible view of `items` for `mode`, preserving input order.
///
/// Pure; callers re-derive on every render instead of caching the result.
pub fn filter_items(items: &[Item], mode: FilterMode) -> Vec<&Item> {
    items.iter().filter(|item| mode.matches(item)).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// User-visible errors
// ─────────────────────────────────────────────────────────────────────────────

/// Transient failure shown in the error banner. The underlying cause is
/// logged, never displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    LoadFailed,
    AddFailed,
    UpdateFailed,
    DeleteFailed,
    EmptyTitle,
}

impl ErrorKind {
    /// Fixed banner text for this kind
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::LoadFailed => "Unable to load todos",
            ErrorKind::AddFailed => "Unable to add a todo",
            ErrorKind::UpdateFailed => "Unable to update a todo",
            ErrorKind::DeleteFailed => "Unable to delete a todo",
            ErrorKind::EmptyTitle => "Title should not be empty",
        }
    }

    /// True for failures reported by the remote store
    pub fn is_remote(&self) -> bool {
        !matches!(self, ErrorKind::EmptyTitle)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
