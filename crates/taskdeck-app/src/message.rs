//! Message types for the application (TEA pattern)

use taskdeck_core::{ErrorKind, FilterMode, Item, ItemField, ItemId, ItemPatch};

use crate::input_key::InputKey;
use crate::requests::RequestSeq;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Startup load
    // ─────────────────────────────────────────────────────────
    /// Fetch the full collection (honoured once)
    LoadItems,
    ItemsLoaded { items: Vec<Item> },
    ItemsLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Header panel
    // ─────────────────────────────────────────────────────────
    HeaderInput(char),
    HeaderBackspace,
    HeaderClear,
    /// Validate the header draft and add it
    SubmitDraft,

    // ─────────────────────────────────────────────────────────
    // Item mutations
    // ─────────────────────────────────────────────────────────
    /// Create an item; `title` is already trimmed and non-empty
    AddItem { title: String },
    ItemAdded { item: Item },
    ItemAddFailed { error: String },

    /// Rename an item; `title` is already trimmed
    EditItem { id: ItemId, title: String },
    ToggleItem { id: ItemId },
    ToggleAll,
    DeleteItem { id: ItemId },
    DeleteAllCompleted,

    ItemUpdated {
        id: ItemId,
        seq: RequestSeq,
        patch: ItemPatch,
    },
    ItemUpdateFailed {
        id: ItemId,
        seq: RequestSeq,
        field: ItemField,
        error: String,
    },
    ItemDeleted { id: ItemId, seq: RequestSeq },
    ItemDeleteFailed {
        id: ItemId,
        seq: RequestSeq,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Filter
    // ─────────────────────────────────────────────────────────
    SetFilter(FilterMode),
    CycleFilter,

    // ─────────────────────────────────────────────────────────
    // Error banner
    // ─────────────────────────────────────────────────────────
    /// A failure happened; shown after the raise delay
    RaiseError(ErrorKind),
    /// Make an error visible now and arm its clear timer
    ShowError(ErrorKind),
    /// Clear timer fired for the error shown with `token`
    ClearError { token: u64 },
    /// Dismiss action of the banner
    DismissError,

    // ─────────────────────────────────────────────────────────
    // List navigation
    // ─────────────────────────────────────────────────────────
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    FocusHeader,
    FocusList,
    ToggleSelected,
    DeleteSelected,

    // ─────────────────────────────────────────────────────────
    // Row editor
    // ─────────────────────────────────────────────────────────
    /// Enter edit mode on the selected row
    StartEditing,
    EditorInput(char),
    EditorBackspace,
    /// Submit the row draft (Enter or blur)
    SubmitEdit,
    /// Discard the row draft (Esc)
    CancelEdit,
}
