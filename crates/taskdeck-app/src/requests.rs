//! In-flight mutation tracking
//!
//! Every mutation request gets a monotonic [`RequestSeq`]. The tracker answers
//! two questions for the reducer:
//! - is an item loading? (at least one of its requests has not settled)
//! - is a settling update still the newest one issued for that item field?
//!
//! Stale update results must not overwrite a value requested later.

use std::collections::HashMap;

use taskdeck_core::{ItemField, ItemId};

/// Completion token attached to each in-flight request
pub type RequestSeq = u64;

#[derive(Debug, Default)]
pub struct RequestTracker {
    next_seq: RequestSeq,
    /// Unsettled request count per item
    pending: HashMap<ItemId, usize>,
    /// Newest update seq per item field
    latest: HashMap<(ItemId, ItemField), RequestSeq>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a request for `id`. `field` is `None` for deletes.
    pub fn begin(&mut self, id: ItemId, field: Option<ItemField>) -> RequestSeq {
        self.next_seq += 1;
        let seq = self.next_seq;
        *self.pending.entry(id).or_insert(0) += 1;
        if let Some(field) = field {
            self.latest.insert((id, field), seq);
        }
        seq
    }

    /// Mark a request as settled (success or failure).
    ///
    /// Returns `true` if its result may be applied: deletes always, updates
    /// only while no newer update for the same field has been issued.
    pub fn settle(&mut self, id: ItemId, field: Option<ItemField>, seq: RequestSeq) -> bool {
        if let Some(count) = self.pending.get_mut(&id) {
            *count -= 1;
            if *count == 0 {
                self.pending.remove(&id);
            }
        }

        match field {
            None => true,
            Some(field) => {
                let key = (id, field);
                let current = self.latest.get(&key) == Some(&seq);
                if current {
                    self.latest.remove(&key);
                }
                current
            }
        }
    }

    pub fn is_loading(&self, id: ItemId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Ids with at least one unsettled request, ascending
    pub fn loading_ids(&self) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self.pending.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Total number of unsettled requests
    pub fn in_flight(&self) -> usize {
        self.pending.values().sum()
    }
}
