//! Order Writers
//!
//! Send planned keys to the reorder endpoints. A 404 becomes
//! `OrderError::NotFound` so callers can tell a vanished item from a
//! network failure.

use async_trait::async_trait;
use board_order::{OrderError, OrderUpdate, OrderWriter};

use super::{reorder_card, reorder_list, CommandError};

fn to_order_error(item_id: u32, err: CommandError) -> OrderError {
    if err.is_not_found() {
        OrderError::NotFound(item_id)
    } else {
        OrderError::Transport(err.to_string())
    }
}

/// Writes card moves through `PUT /api/cards/{id}/reorder`
pub struct CardOrderWriter;

#[async_trait(?Send)]
impl OrderWriter for CardOrderWriter {
    async fn update_order(&self, update: &OrderUpdate) -> Result<(), OrderError> {
        reorder_card(update.item_id, update.new_parent_id, update.sort_key)
            .await
            .map(|_| ())
            .map_err(|e| to_order_error(update.item_id, e))
    }
}

/// Writes list moves through `PUT /api/lists/{id}/reorder`.
///
/// Lists never change board, so `new_parent_id` is ignored.
pub struct ListOrderWriter;

#[async_trait(?Send)]
impl OrderWriter for ListOrderWriter {
    async fn update_order(&self, update: &OrderUpdate) -> Result<(), OrderError> {
        reorder_list(update.item_id, update.sort_key)
            .await
            .map(|_| ())
            .map_err(|e| to_order_error(update.item_id, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        let missing = CommandError::Status {
            status: 404,
            message: "Card 3 not found".to_string(),
        };
        assert_eq!(to_order_error(3, missing), OrderError::NotFound(3));

        let offline = CommandError::Request("connection refused".to_string());
        assert_eq!(
            to_order_error(3, offline),
            OrderError::Transport("Request failed: connection refused".to_string())
        );
    }
}
