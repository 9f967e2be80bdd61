//! Test utilities for the item store
//!
//! [`InMemoryItemStore`] behaves like the remote service (server-assigned ids,
//! owner scoping, 404 on unknown ids) and records every call so tests can
//! assert on the traffic the application generated.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use taskdeck_core::prelude::*;
use taskdeck_core::{Item, ItemId, ItemPatch, NewItem, OwnerId};

use crate::store::ItemStore;

/// Store operation, used to select which calls should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    List,
    Create,
    Update,
    Delete,
}

/// A recorded call against the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    List,
    Create(NewItem),
    Update(ItemId, ItemPatch),
    Delete(ItemId),
}

#[derive(Debug, Default)]
struct Inner {
    items: Vec<Item>,
    next_id: ItemId,
    calls: Vec<StoreCall>,
    failing: HashSet<StoreOp>,
    latency: Option<Duration>,
}

/// Cloneable in-memory store; clones share the same backing data
#[derive(Debug, Clone)]
pub struct InMemoryItemStore {
    owner_id: OwnerId,
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryItemStore {
    pub fn new(owner_id: OwnerId) -> Self {
        Self {
            owner_id,
            inner: Arc::new(Mutex::new(Inner {
                next_id: 1,
                ..Inner::default()
            })),
        }
    }

    /// Seed the store with items (ids are kept as given)
    pub fn with_items(self, items: Vec<Item>) -> Self {
        {
            let mut inner = self.lock();
            inner.next_id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
            inner.items = items;
        }
        self
    }

    /// Delay every response by `latency` (use with a paused tokio clock)
    pub fn with_latency(self, latency: Duration) -> Self {
        self.lock().latency = Some(latency);
        self
    }

    /// Make every subsequent call of `op` fail with a 500 status
    pub fn fail(&self, op: StoreOp) {
        self.lock().failing.insert(op);
    }

    /// Stop failing `op`
    pub fn recover(&self, op: StoreOp) {
        self.lock().failing.remove(&op);
    }

    pub fn items(&self) -> Vec<Item> {
        self.lock().items.clone()
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock().calls.clone()
    }

    /// Number of recorded calls matching `op`
    pub fn call_count(&self, op: StoreOp) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.op() == op)
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A test that panicked while holding the lock already failed
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record the call and decide whether it should fail
    async fn begin(&self, call: StoreCall) -> Result<()> {
        let op = call.op();
        let (latency, failing) = {
            let mut inner = self.lock();
            inner.calls.push(call);
            (inner.latency, inner.failing.contains(&op))
        };
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        if failing {
            return Err(Error::status(500));
        }
        Ok(())
    }
}

impl StoreCall {
    pub fn op(&self) -> StoreOp {
        match self {
            StoreCall::List => StoreOp::List,
            StoreCall::Create(_) => StoreOp::Create,
            StoreCall::Update(..) => StoreOp::Update,
            StoreCall::Delete(_) => StoreOp::Delete,
        }
    }
}

impl ItemStore for InMemoryItemStore {
    async fn list(&self) -> Result<Vec<Item>> {
        self.begin(StoreCall::List).await?;
        let owner_id = self.owner_id;
        Ok(self
            .lock()
            .items
            .iter()
            .filter(|item| item.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn create(&self, item: NewItem) -> Result<Item> {
        self.begin(StoreCall::Create(item.clone())).await?;
        let mut inner = self.lock();
        let created = Item {
            id: inner.next_id,
            user_id: item.user_id,
            title: item.title,
            completed: item.completed,
        };
        inner.next_id += 1;
        inner.items.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<()> {
        self.begin(StoreCall::Update(id, patch.clone())).await?;
        let mut inner = self.lock();
        let item = inner
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(Error::status(404))?;
        item.apply(&patch);
        Ok(())
    }

    async fn delete(&self, id: ItemId) -> Result<()> {
        self.begin(StoreCall::Delete(id)).await?;
        let mut inner = self.lock();
        let before = inner.items.len();
        inner.items.retain(|item| item.id != id);
        if inner.items.len() == before {
            return Err(Error::status(404));
        }
        Ok(())
    }
}

/// Build a test item owned by `user_id`
pub fn test_item(id: ItemId, user_id: OwnerId, title: &str, completed: bool) -> Item {
    Item {
        id,
        user_id,
        title: title.to_string(),
        completed,
    }
}
