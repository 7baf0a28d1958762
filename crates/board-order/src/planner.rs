//! Reposition Planner
//!
//! Computes the sort key for an item dropped at `target_index` of a sibling
//! sequence that no longer contains it. Keys are interpolated between the
//! neighbours; nothing is ever renumbered here.

use crate::item::OrderedItem;

/// Sort key for inserting at `target_index` of `ordered_siblings`.
///
/// `ordered_siblings` must be ascending by sort key with the moved item
/// already removed.
///
/// # Panics
///
/// Panics when `target_index > ordered_siblings.len()`.
pub fn plan_key<T: OrderedItem>(ordered_siblings: &[T], target_index: usize) -> f64 {
    let keys: Vec<f64> = ordered_siblings.iter().map(OrderedItem::sort_key).collect();
    plan_key_between(&keys, target_index)
}

/// Same as [`plan_key`] over bare sort keys.
///
/// # Panics
///
/// Panics when `target_index > keys.len()`.
pub fn plan_key_between(keys: &[f64], target_index: usize) -> f64 {
    assert!(
        target_index <= keys.len(),
        "target index {} out of range for {} siblings",
        target_index,
        keys.len()
    );

    match (target_index, keys.len()) {
        (_, 0) => 0.0,
        (0, _) => keys[0] - 1.0,
        (i, len) if i == len => keys[len - 1] + 1.0,
        (i, _) => (keys[i - 1] + keys[i]) / 2.0,
    }
}
