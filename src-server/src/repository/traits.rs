//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Lists and cards share one contract: an ordered collection keyed by parent.

use async_trait::async_trait;
use board_order::OrderedItem;

use crate::domain::{DomainResult, Entity};

/// Storage for items ordered by a floating-point key under a parent.
///
/// All operations are async to support various backends.
#[async_trait]
pub trait OrderedRepository<T: Entity + OrderedItem>: Send + Sync {
    /// Attributes needed to create an item
    type Attrs: Send + Sync;

    /// Insert at the end of the parent's sequence (`max + 1`, or `0` when empty)
    async fn create(&self, parent_id: u32, attrs: &Self::Attrs) -> DomainResult<T>;

    /// Find item by ID
    async fn find_by_id(&self, id: u32) -> DomainResult<Option<T>>;

    /// All items of a parent, ascending by key. Empty for unknown parents.
    async fn list_by_parent(&self, parent_id: u32) -> DomainResult<Vec<T>>;

    /// Set the item's key, and its parent when `new_parent_id` is given.
    ///
    /// Fails with `DomainError::NotFound` if the item does not exist.
    async fn reposition(&self, id: u32, new_parent_id: Option<u32>, sort_key: f64) -> DomainResult<T>;

    /// Delete the item (and anything it contains). Returns whether a row was deleted.
    async fn remove(&self, id: u32) -> DomainResult<bool>;
}

/// Key bookkeeping for ordered collections
#[async_trait]
pub trait PositioningOperations: Send + Sync {
    /// Renumber the parent's items to 0, 1, 2, ... keeping their order.
    ///
    /// Only runs when asked; moves never trigger it. Returns the number of
    /// items renumbered.
    async fn rebalance(&self, parent_id: u32) -> DomainResult<usize>;
}
