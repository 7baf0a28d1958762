//! Persistence Round-trip
//!
//! One write per move, no retry. Failures go back to the caller, which logs
//! them and keeps its optimistic view as is.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::{ItemId, ParentId};

/// The committed result of a move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub item_id: ItemId,
    /// Set only when the item changed parent
    pub new_parent_id: Option<ParentId>,
    pub sort_key: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    #[error("Item {0} not found")]
    NotFound(ItemId),

    #[error("Order update failed: {0}")]
    Transport(String),
}

/// Sink for order updates: the HTTP client in the browser, the repository on
/// the server.
#[async_trait(?Send)]
pub trait OrderWriter {
    async fn update_order(&self, update: &OrderUpdate) -> Result<(), OrderError>;
}

/// Send `update` once. Errors are logged and returned, never retried.
pub async fn persist<W>(writer: &W, update: OrderUpdate) -> Result<(), OrderError>
where
    W: OrderWriter + ?Sized,
{
    let result = writer.update_order(&update).await;
    if let Err(e) = &result {
        log::error!(
            "failed to persist order of item {} (key {}): {}",
            update.item_id,
            update.sort_key,
            e
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingWriter {
        missing: Vec<ItemId>,
        writes: RefCell<Vec<OrderUpdate>>,
    }

    #[async_trait(?Send)]
    impl OrderWriter for RecordingWriter {
        async fn update_order(&self, update: &OrderUpdate) -> Result<(), OrderError> {
            if self.missing.contains(&update.item_id) {
                return Err(OrderError::NotFound(update.item_id));
            }
            self.writes.borrow_mut().push(*update);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_persist_sends_one_write() {
        let writer = RecordingWriter::default();
        let update = OrderUpdate {
            item_id: 4,
            new_parent_id: Some(2),
            sort_key: 0.5,
        };

        persist(&writer, update).await.unwrap();
        assert_eq!(writer.writes.borrow().as_slice(), &[update]);
    }

    #[tokio::test]
    async fn test_persist_surfaces_not_found() {
        let writer = RecordingWriter {
            missing: vec![7],
            ..Default::default()
        };
        let err = persist(
            &writer,
            OrderUpdate {
                item_id: 7,
                new_parent_id: None,
                sort_key: 1.0,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err, OrderError::NotFound(7));
        assert!(writer.writes.borrow().is_empty());
    }
}
