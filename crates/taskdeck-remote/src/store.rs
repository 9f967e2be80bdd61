//! Remote item store contract
//!
//! Every operation is scoped to the owner id the store was built with. The
//! application layer only depends on this trait, so it can be driven by the
//! HTTP client in production and by an in-memory fake in tests.

use taskdeck_core::prelude::*;
use taskdeck_core::{Item, ItemId, ItemPatch, NewItem};

/// Async access to the items of one owner
///
/// Implement [`ItemStore`]; the `Local` variant is provided by a blanket impl.
#[trait_variant::make(ItemStore: Send)]
pub trait LocalItemStore {
    /// Fetch the owner's full, ordered collection
    async fn list(&self) -> Result<Vec<Item>>;

    /// Create an item; the returned value carries the server-assigned id
    async fn create(&self, item: NewItem) -> Result<Item>;

    /// Update one field of an item. Only success matters, the body is ignored.
    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<()>;

    /// Remove an item
    async fn delete(&self, id: ItemId) -> Result<()>;
}
