//! Board Ordering Core
//!
//! Ordering of lists within a board and cards within a list:
//! - item: the `OrderedItem` contract shared by client and server entities
//! - planner: sort key for a target index (midpoint interpolation)
//! - projection: client-side ordered view with optimistic moves
//! - round_trip: the single write that persists a move

mod item;
mod planner;
mod projection;
mod round_trip;

pub use item::{compare_items, sort_ordered, ItemId, OrderedItem, ParentId};
pub use planner::{plan_key, plan_key_between};
pub use projection::{DragEnd, Projection};
pub use round_trip::{persist, OrderError, OrderUpdate, OrderWriter};
