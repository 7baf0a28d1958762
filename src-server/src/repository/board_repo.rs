//! Board Repository
//!
//! Boards and the multi-row operations around them: creating a board with its
//! default lists, loading the nested board view, deleting everything under a
//! board.

use std::collections::HashMap;
use std::sync::Arc;

use rusqlite::{params, Connection, OptionalExtension, Row};
use tokio::sync::Mutex;

use super::card_repo::row_to_card;
use super::list_repo::row_to_list;
use super::positioning::now_millis;
use crate::domain::{
    Board, BoardDetail, Card, DomainError, DomainResult, ListWithCards, DEFAULT_BACKGROUND,
    DEFAULT_LISTS,
};

const BOARD_COLUMNS: &str = "id, name, background_color, created_at, updated_at";

pub struct BoardRepository {
    conn: Arc<Mutex<Connection>>,
}

impl BoardRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Create a board together with its default lists.
    ///
    /// Either the board and all default lists are stored, or nothing is.
    pub async fn create_with_default_lists(
        &self,
        name: &str,
        background_color: Option<&str>,
    ) -> DomainResult<BoardDetail> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("Board name must not be empty".to_string()));
        }
        let background_color = background_color
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_BACKGROUND);

        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;
        let now = now_millis();

        let board = tx.query_row(
            &format!(
                "INSERT INTO boards (name, background_color, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?3) RETURNING {}",
                BOARD_COLUMNS
            ),
            params![name, background_color, now],
            row_to_board,
        )?;

        let mut lists = Vec::with_capacity(DEFAULT_LISTS.len());
        for (position, list_name) in DEFAULT_LISTS.iter().enumerate() {
            let list = tx.query_row(
                "INSERT INTO lists (board_id, name, position, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?4)
                 RETURNING id, board_id, name, position, created_at, updated_at",
                params![board.id, list_name, position as f64, now],
                row_to_list,
            )?;
            lists.push(ListWithCards { list, cards: Vec::new() });
        }

        tx.commit()?;
        log::info!("Created board {} '{}' with {} lists", board.id, board.name, lists.len());

        Ok(BoardDetail { board, lists })
    }

    /// All boards, most recently updated first
    pub async fn list(&self) -> DomainResult<Vec<Board>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM boards ORDER BY updated_at DESC, id DESC",
            BOARD_COLUMNS
        ))?;
        let rows = stmt.query_map([], row_to_board)?;
        let boards = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(boards)
    }

    /// The board with its lists and their cards, each in display order
    pub async fn load_detail(&self, id: u32) -> DomainResult<Option<BoardDetail>> {
        let conn = self.conn.lock().await;

        let board = conn
            .query_row(
                &format!("SELECT {} FROM boards WHERE id = ?1", BOARD_COLUMNS),
                params![id],
                row_to_board,
            )
            .optional()?;
        let Some(board) = board else {
            return Ok(None);
        };

        let lists = {
            let mut stmt = conn.prepare(
                "SELECT id, board_id, name, position, created_at, updated_at
                 FROM lists WHERE board_id = ?1
                 ORDER BY position ASC, id ASC",
            )?;
            let rows = stmt.query_map(params![id], row_to_list)?;
            let lists = rows.collect::<Result<Vec<_>, _>>()?;
            lists
        };

        let mut cards_by_list: HashMap<u32, Vec<Card>> = HashMap::new();
        {
            let mut stmt = conn.prepare(
                "SELECT c.id, c.list_id, c.name, c.description, c.position, c.due_date, c.created_at, c.updated_at
                 FROM cards c
                 JOIN lists l ON c.list_id = l.id
                 WHERE l.board_id = ?1
                 ORDER BY c.position ASC, c.id ASC",
            )?;
            let rows = stmt.query_map(params![id], row_to_card)?;
            for card in rows {
                let card = card?;
                cards_by_list.entry(card.list_id).or_default().push(card);
            }
        }

        let lists = lists
            .into_iter()
            .map(|list| {
                let cards = cards_by_list.remove(&list.id).unwrap_or_default();
                ListWithCards { list, cards }
            })
            .collect();

        Ok(Some(BoardDetail { board, lists }))
    }

    /// Delete the board, its lists and their cards
    pub async fn delete(&self, id: u32) -> DomainResult<bool> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        tx.execute(
            "DELETE FROM cards WHERE list_id IN (SELECT id FROM lists WHERE board_id = ?1)",
            params![id],
        )?;
        tx.execute("DELETE FROM lists WHERE board_id = ?1", params![id])?;
        let deleted = tx.execute("DELETE FROM boards WHERE id = ?1", params![id])?;
        tx.commit()?;

        Ok(deleted > 0)
    }
}

fn row_to_board(row: &Row) -> rusqlite::Result<Board> {
    Ok(Board {
        id: row.get(0)?,
        name: row.get(1)?,
        background_color: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}
