//! List Repository
//!
//! SQLite-backed ordered collection of lists under their board.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tokio::sync::Mutex;

use super::positioning::{next_sort_key, now_millis, update_position, LISTS};
use super::traits::OrderedRepository;
use crate::domain::{DomainError, DomainResult, List, NewList};

const LIST_COLUMNS: &str = "id, board_id, name, position, created_at, updated_at";

/// SQLite implementation of the list store
pub struct ListRepository {
    pub(super) conn: Arc<Mutex<Connection>>,
}

impl ListRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Change a list's name
    pub async fn rename(&self, id: u32, attrs: &NewList) -> DomainResult<List> {
        let conn = self.conn.lock().await;
        conn.query_row(
            &format!(
                "UPDATE lists SET name = ?1, updated_at = ?2 WHERE id = ?3 RETURNING {}",
                LIST_COLUMNS
            ),
            params![attrs.name, now_millis(), id],
            row_to_list,
        )
        .optional()?
        .ok_or_else(|| DomainError::NotFound(format!("List {} not found", id)))
    }
}

pub(super) fn board_exists(conn: &Connection, board_id: u32) -> DomainResult<bool> {
    Ok(conn
        .query_row("SELECT 1 FROM boards WHERE id = ?1", params![board_id], |_| Ok(()))
        .optional()?
        .is_some())
}

#[async_trait]
impl OrderedRepository<List> for ListRepository {
    type Attrs = NewList;

    async fn create(&self, parent_id: u32, attrs: &NewList) -> DomainResult<List> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        if !board_exists(&tx, parent_id)? {
            return Err(DomainError::NotFound(format!("Board {} not found", parent_id)));
        }

        let position = next_sort_key(&tx, &LISTS, parent_id)?;
        let now = now_millis();
        let list = tx.query_row(
            &format!(
                "INSERT INTO lists (board_id, name, position, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?4) RETURNING {}",
                LIST_COLUMNS
            ),
            params![parent_id, attrs.name, position, now],
            row_to_list,
        )?;
        tx.commit()?;

        log::debug!("Created list {} on board {} at {}", list.id, parent_id, position);
        Ok(list)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<List>> {
        let conn = self.conn.lock().await;
        Ok(conn
            .query_row(
                &format!("SELECT {} FROM lists WHERE id = ?1", LIST_COLUMNS),
                params![id],
                row_to_list,
            )
            .optional()?)
    }

    async fn list_by_parent(&self, parent_id: u32) -> DomainResult<Vec<List>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM lists WHERE board_id = ?1 ORDER BY position ASC, id ASC",
            LIST_COLUMNS
        ))?;
        let rows = stmt.query_map(params![parent_id], row_to_list)?;
        let lists = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(lists)
    }

    async fn reposition(&self, id: u32, new_parent_id: Option<u32>, sort_key: f64) -> DomainResult<List> {
        let conn = self.conn.lock().await;

        if let Some(board_id) = new_parent_id {
            if !board_exists(&conn, board_id)? {
                return Err(DomainError::NotFound(format!("Board {} not found", board_id)));
            }
        }

        if !update_position(&conn, &LISTS, id, new_parent_id, sort_key)? {
            return Err(DomainError::NotFound(format!("List {} not found", id)));
        }

        Ok(conn.query_row(
            &format!("SELECT {} FROM lists WHERE id = ?1", LIST_COLUMNS),
            params![id],
            row_to_list,
        )?)
    }

    async fn remove(&self, id: u32) -> DomainResult<bool> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        // Cards first, so none is left pointing at a missing list
        let cards = tx.execute("DELETE FROM cards WHERE list_id = ?1", params![id])?;
        let deleted = tx.execute("DELETE FROM lists WHERE id = ?1", params![id])?;
        tx.commit()?;

        if deleted > 0 {
            log::debug!("Deleted list {} with {} cards", id, cards);
        }
        Ok(deleted > 0)
    }
}

/// Convert a database row to List
pub(super) fn row_to_list(row: &Row) -> rusqlite::Result<List> {
    Ok(List {
        id: row.get(0)?,
        board_id: row.get(1)?,
        name: row.get(2)?,
        position: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}
