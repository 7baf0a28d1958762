//! Positioning Operations
//!
//! Sort key bookkeeping shared by the list and card tables: next key on
//! create, single-row key updates, and opt-in renumbering.

use async_trait::async_trait;
use rusqlite::{params, Connection};

use super::card_repo::CardRepository;
use super::list_repo::ListRepository;
use super::traits::PositioningOperations;
use crate::domain::DomainResult;

/// A table holding ordered items and the column naming their parent
pub(super) struct OrderedTable {
    pub table: &'static str,
    pub parent_column: &'static str,
}

pub(super) const LISTS: OrderedTable = OrderedTable {
    table: "lists",
    parent_column: "board_id",
};

pub(super) const CARDS: OrderedTable = OrderedTable {
    table: "cards",
    parent_column: "list_id",
};

pub(super) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// `max(position) + 1` under the parent, or `0` when it has no items
pub(super) fn next_sort_key(conn: &Connection, t: &OrderedTable, parent_id: u32) -> DomainResult<f64> {
    let sql = format!(
        "SELECT COALESCE(MAX(position) + 1, 0) FROM {} WHERE {} = ?1",
        t.table, t.parent_column
    );
    Ok(conn.query_row(&sql, params![parent_id], |row| row.get::<_, f64>(0))?)
}

/// Write a new key (and parent) to one row. Returns false if no row matched.
pub(super) fn update_position(
    conn: &Connection,
    t: &OrderedTable,
    id: u32,
    new_parent_id: Option<u32>,
    sort_key: f64,
) -> DomainResult<bool> {
    let now = now_millis();
    let changed = match new_parent_id {
        Some(parent_id) => conn.execute(
            &format!(
                "UPDATE {} SET {} = ?1, position = ?2, updated_at = ?3 WHERE id = ?4",
                t.table, t.parent_column
            ),
            params![parent_id, sort_key, now, id],
        )?,
        None => conn.execute(
            &format!("UPDATE {} SET position = ?1, updated_at = ?2 WHERE id = ?3", t.table),
            params![sort_key, now, id],
        )?,
    };
    Ok(changed > 0)
}

/// Renumber one parent's items to 0, 1, 2, ... in current order
pub(super) fn reindex(conn: &mut Connection, t: &OrderedTable, parent_id: u32) -> DomainResult<usize> {
    let tx = conn.transaction()?;

    let ids: Vec<u32> = {
        let mut stmt = tx.prepare(&format!(
            "SELECT id FROM {} WHERE {} = ?1 ORDER BY position, id",
            t.table, t.parent_column
        ))?;
        let rows = stmt.query_map(params![parent_id], |row| row.get::<_, u32>(0))?;
        let ids = rows.collect::<Result<Vec<u32>, _>>()?;
        ids
    };

    let now = now_millis();
    for (new_pos, id) in ids.iter().enumerate() {
        tx.execute(
            &format!("UPDATE {} SET position = ?1, updated_at = ?2 WHERE id = ?3", t.table),
            params![new_pos as f64, now, *id],
        )?;
    }

    tx.commit()?;
    Ok(ids.len())
}

#[async_trait]
impl PositioningOperations for ListRepository {
    async fn rebalance(&self, parent_id: u32) -> DomainResult<usize> {
        let mut conn = self.conn.lock().await;
        let count = reindex(&mut conn, &LISTS, parent_id)?;
        log::info!("Rebalanced {} lists on board {}", count, parent_id);
        Ok(count)
    }
}

#[async_trait]
impl PositioningOperations for CardRepository {
    async fn rebalance(&self, parent_id: u32) -> DomainResult<usize> {
        let mut conn = self.conn.lock().await;
        let count = reindex(&mut conn, &CARDS, parent_id)?;
        log::info!("Rebalanced {} cards in list {}", count, parent_id);
        Ok(count)
    }
}
