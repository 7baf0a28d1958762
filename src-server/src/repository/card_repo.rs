//! Card Repository
//!
//! SQLite-backed ordered collection of cards under their list.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use tokio::sync::Mutex;

use super::positioning::{next_sort_key, now_millis, update_position, CARDS};
use super::traits::OrderedRepository;
use crate::domain::{Card, DomainError, DomainResult, NewCard};

const CARD_COLUMNS: &str = "id, list_id, name, description, position, due_date, created_at, updated_at";

/// SQLite implementation of the card store
pub struct CardRepository {
    pub(super) conn: Arc<Mutex<Connection>>,
}

/// Field changes for an existing card; `None` leaves a field alone
#[derive(Debug, Clone, Default)]
pub struct CardChanges {
    pub name: Option<String>,
    /// `Some("")` clears the description
    pub description: Option<String>,
    /// `Some(None)` clears the due date
    pub due_date: Option<Option<i64>>,
}

impl CardRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Apply name / description / due date changes and return the stored card
    pub async fn update_details(&self, id: u32, changes: &CardChanges) -> DomainResult<Card> {
        let mut fields: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(name) = &changes.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(DomainError::InvalidInput("Card name must not be empty".to_string()));
            }
            fields.push("name");
            values.push(Value::Text(name.to_string()));
        }
        if let Some(description) = &changes.description {
            let description = description.trim();
            fields.push("description");
            values.push(if description.is_empty() {
                Value::Null
            } else {
                Value::Text(description.to_string())
            });
        }
        if let Some(due_date) = changes.due_date {
            fields.push("due_date");
            values.push(due_date.map_or(Value::Null, Value::Integer));
        }

        let conn = self.conn.lock().await;
        let changed = if fields.is_empty() {
            1
        } else {
            let sets: Vec<String> = fields
                .iter()
                .enumerate()
                .map(|(i, field)| format!("{} = ?{}", field, i + 1))
                .collect();
            values.push(Value::Integer(now_millis()));
            values.push(Value::Integer(i64::from(id)));
            let sql = format!(
                "UPDATE cards SET {}, updated_at = ?{} WHERE id = ?{}",
                sets.join(", "),
                fields.len() + 1,
                fields.len() + 2
            );
            conn.execute(&sql, params_from_iter(values))?
        };

        let card = conn
            .query_row(
                &format!("SELECT {} FROM cards WHERE id = ?1", CARD_COLUMNS),
                params![id],
                row_to_card,
            )
            .optional()?;
        match card {
            Some(card) if changed > 0 => Ok(card),
            _ => Err(DomainError::NotFound(format!("Card {} not found", id))),
        }
    }
}

fn list_exists(conn: &Connection, list_id: u32) -> DomainResult<bool> {
    Ok(conn
        .query_row("SELECT 1 FROM lists WHERE id = ?1", params![list_id], |_| Ok(()))
        .optional()?
        .is_some())
}

#[async_trait]
impl OrderedRepository<Card> for CardRepository {
    type Attrs = NewCard;

    async fn create(&self, parent_id: u32, attrs: &NewCard) -> DomainResult<Card> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        if !list_exists(&tx, parent_id)? {
            return Err(DomainError::NotFound(format!("List {} not found", parent_id)));
        }

        let position = next_sort_key(&tx, &CARDS, parent_id)?;
        let now = now_millis();
        let card = tx.query_row(
            &format!(
                "INSERT INTO cards (list_id, name, description, position, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5) RETURNING {}",
                CARD_COLUMNS
            ),
            params![parent_id, attrs.name, attrs.description, position, now],
            row_to_card,
        )?;
        tx.commit()?;

        log::debug!("Created card {} in list {} at {}", card.id, parent_id, position);
        Ok(card)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Card>> {
        let conn = self.conn.lock().await;
        Ok(conn
            .query_row(
                &format!("SELECT {} FROM cards WHERE id = ?1", CARD_COLUMNS),
                params![id],
                row_to_card,
            )
            .optional()?)
    }

    async fn list_by_parent(&self, parent_id: u32) -> DomainResult<Vec<Card>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM cards WHERE list_id = ?1 ORDER BY position ASC, id ASC",
            CARD_COLUMNS
        ))?;
        let rows = stmt.query_map(params![parent_id], row_to_card)?;
        let cards = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(cards)
    }

    async fn reposition(&self, id: u32, new_parent_id: Option<u32>, sort_key: f64) -> DomainResult<Card> {
        let conn = self.conn.lock().await;

        if let Some(list_id) = new_parent_id {
            if !list_exists(&conn, list_id)? {
                return Err(DomainError::NotFound(format!("List {} not found", list_id)));
            }
        }

        if !update_position(&conn, &CARDS, id, new_parent_id, sort_key)? {
            return Err(DomainError::NotFound(format!("Card {} not found", id)));
        }

        Ok(conn.query_row(
            &format!("SELECT {} FROM cards WHERE id = ?1", CARD_COLUMNS),
            params![id],
            row_to_card,
        )?)
    }

    async fn remove(&self, id: u32) -> DomainResult<bool> {
        let conn = self.conn.lock().await;
        let deleted = conn.execute("DELETE FROM cards WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}

/// Convert a database row to Card
pub(super) fn row_to_card(row: &Row) -> rusqlite::Result<Card> {
    Ok(Card {
        id: row.get(0)?,
        list_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        position: row.get(4)?,
        due_date: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}
