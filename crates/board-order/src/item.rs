//! Ordered Item Contract
//!
//! Anything that lives in an ordered collection under a parent:
//! a list under its board, a card under its list.

use std::cmp::Ordering;

pub type ItemId = u32;
pub type ParentId = u32;

/// An entity carrying a parent reference and a floating-point sort key.
pub trait OrderedItem: Clone {
    fn id(&self) -> ItemId;

    fn parent_id(&self) -> ParentId;

    /// Sort key within the parent (the `position` column)
    fn sort_key(&self) -> f64;

    /// Move the item under `parent_id` with a new sort key
    fn place(&mut self, parent_id: ParentId, sort_key: f64);
}

/// Order two items the way the store reads them back: key ascending, then id.
pub fn compare_items<T: OrderedItem>(a: &T, b: &T) -> Ordering {
    a.sort_key()
        .total_cmp(&b.sort_key())
        .then_with(|| a.id().cmp(&b.id()))
}

/// Sort a sibling sequence into user-visible order
pub fn sort_ordered<T: OrderedItem>(items: &mut [T]) {
    items.sort_by(compare_items);
}
