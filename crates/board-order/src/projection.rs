//! Optimistic Client Projection
//!
//! In-memory copy of ordered sequences keyed by parent. A move is applied here
//! immediately and the resulting `OrderUpdate` is handed to the caller to
//! persist; the projection never waits for, or rolls back on, the server.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::item::{compare_items, ItemId, OrderedItem, ParentId};
use crate::planner::plan_key;
use crate::round_trip::OrderUpdate;

/// A finished drag: where the item was and where it should land.
///
/// `dest_index` counts positions in the destination sequence with the moved
/// item already taken out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub item_id: ItemId,
    pub source_parent_id: ParentId,
    pub source_index: usize,
    pub dest_parent_id: ParentId,
    pub dest_index: usize,
}

impl DragEnd {
    /// Build from a drop slot index.
    ///
    /// Slots are counted while the dragged item is still displayed, so a slot
    /// below the item in its own parent is one past the real destination.
    pub fn from_slot(
        item_id: ItemId,
        source_parent_id: ParentId,
        source_index: usize,
        dest_parent_id: ParentId,
        slot_index: usize,
    ) -> Self {
        let dest_index = if source_parent_id == dest_parent_id && slot_index > source_index {
            slot_index - 1
        } else {
            slot_index
        };
        Self {
            item_id,
            source_parent_id,
            source_index,
            dest_parent_id,
            dest_index,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.source_parent_id == self.dest_parent_id && self.source_index == self.dest_index
    }
}

/// Ordered sequences of `T`, one per parent
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<T> {
    sequences: HashMap<ParentId, Vec<T>>,
}

impl<T> Default for Projection<T> {
    fn default() -> Self {
        Self {
            sequences: HashMap::new(),
        }
    }
}

impl<T: OrderedItem> Projection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with `items`, grouped by parent and sorted
    pub fn load(&mut self, items: impl IntoIterator<Item = T>) {
        self.sequences.clear();
        for item in items {
            self.sequences.entry(item.parent_id()).or_default().push(item);
        }
        for seq in self.sequences.values_mut() {
            seq.sort_by(compare_items);
        }
    }

    /// Replace one parent's sequence (e.g. after a re-fetch)
    pub fn replace_parent(&mut self, parent_id: ParentId, mut items: Vec<T>) {
        items.retain(|item| item.parent_id() == parent_id);
        items.sort_by(compare_items);
        self.sequences.insert(parent_id, items);
    }

    pub fn sequence(&self, parent_id: ParentId) -> &[T] {
        self.sequences
            .get(&parent_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn get(&self, item_id: ItemId) -> Option<&T> {
        self.sequences
            .values()
            .flat_map(|seq| seq.iter())
            .find(|item| item.id() == item_id)
    }

    /// Parent and index of an item in the current view
    pub fn locate(&self, item_id: ItemId) -> Option<(ParentId, usize)> {
        self.sequences.iter().find_map(|(parent_id, seq)| {
            seq.iter()
                .position(|item| item.id() == item_id)
                .map(|index| (*parent_id, index))
        })
    }

    pub fn len(&self) -> usize {
        self.sequences.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add an item the store just created, keeping key order
    pub fn insert(&mut self, item: T) {
        let seq = self.sequences.entry(item.parent_id()).or_default();
        let at = seq.partition_point(|other| compare_items(other, &item).is_lt());
        seq.insert(at, item);
    }

    pub fn remove(&mut self, item_id: ItemId) -> Option<T> {
        let (parent_id, index) = self.locate(item_id)?;
        self.sequences
            .get_mut(&parent_id)
            .map(|seq| seq.remove(index))
    }

    /// Drop a whole parent's sequence (client side of a cascading delete)
    pub fn remove_parent(&mut self, parent_id: ParentId) -> Vec<T> {
        self.sequences.remove(&parent_id).unwrap_or_default()
    }

    /// Apply a drag immediately and return the write to persist.
    ///
    /// Returns `None` without touching anything when the drop is a no-op or
    /// when the event no longer matches the view.
    pub fn apply_move(&mut self, event: DragEnd) -> Option<OrderUpdate> {
        if event.is_noop() {
            return None;
        }

        let source = self.sequences.get(&event.source_parent_id)?;
        match source.get(event.source_index) {
            Some(item) if item.id() == event.item_id => {}
            _ => {
                log::warn!(
                    "stale drag for item {}: not at index {} of parent {}",
                    event.item_id,
                    event.source_index,
                    event.source_parent_id
                );
                return None;
            }
        }

        let dest_len = self.sequence(event.dest_parent_id).len();
        let dest_len = if event.source_parent_id == event.dest_parent_id {
            dest_len - 1
        } else {
            dest_len
        };
        if event.dest_index > dest_len {
            log::warn!(
                "drop index {} out of range for parent {} ({} items)",
                event.dest_index,
                event.dest_parent_id,
                dest_len
            );
            return None;
        }

        let mut item = self
            .sequences
            .get_mut(&event.source_parent_id)?
            .remove(event.source_index);

        let dest = self.sequences.entry(event.dest_parent_id).or_default();
        let sort_key = plan_key(dest.as_slice(), event.dest_index);
        item.place(event.dest_parent_id, sort_key);
        dest.insert(event.dest_index, item);

        log::debug!(
            "moved item {} to parent {} index {} (key {})",
            event.item_id,
            event.dest_parent_id,
            event.dest_index,
            sort_key
        );

        Some(OrderUpdate {
            item_id: event.item_id,
            new_parent_id: (event.source_parent_id != event.dest_parent_id)
                .then_some(event.dest_parent_id),
            sort_key,
        })
    }
}
