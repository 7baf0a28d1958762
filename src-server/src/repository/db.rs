//! Database Connection and Setup
//!
//! Manages the SQLite connection and migrations.

use std::path::Path;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

use crate::domain::DomainResult;

/// Shared connection handle.
///
/// Repositories clone the inner `Arc`; every statement runs under the lock,
/// so each single-row update is atomic with respect to other requests.
#[derive(Clone)]
pub struct DbState {
    conn: Arc<Mutex<Connection>>,
}

impl DbState {
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }
}

/// Open (or create) the database at `db_path` and run migrations.
///
/// `":memory:"` opens a private in-memory database.
pub fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let conn = if db_path.as_os_str() == ":memory:" {
        Connection::open_in_memory()?
    } else {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                crate::domain::DomainError::Internal(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        Connection::open(db_path)?
    };

    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    run_migrations(&conn)?;
    log::info!("Database ready at {}", db_path.display());

    Ok(DbState {
        conn: Arc::new(Mutex::new(conn)),
    })
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> DomainResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for name in names {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS boards (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            background_color TEXT NOT NULL DEFAULT '#0079bf',
            created_at INTEGER,
            updated_at INTEGER
        );

        CREATE TABLE IF NOT EXISTS lists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            board_id INTEGER NOT NULL REFERENCES boards(id),
            name TEXT NOT NULL,
            position REAL NOT NULL DEFAULT 0,
            created_at INTEGER,
            updated_at INTEGER
        );

        CREATE TABLE IF NOT EXISTS cards (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            list_id INTEGER NOT NULL REFERENCES lists(id),
            name TEXT NOT NULL,
            position REAL NOT NULL DEFAULT 0,
            created_at INTEGER,
            updated_at INTEGER
        );",
    )?;

    // Added after the first schema: card notes
    if !column_exists(conn, "cards", "description")? {
        conn.execute("ALTER TABLE cards ADD COLUMN description TEXT", [])?;
    }
    if !column_exists(conn, "cards", "due_date")? {
        conn.execute("ALTER TABLE cards ADD COLUMN due_date INTEGER", [])?;
    }

    // Ordered reads are always "by parent, ascending key"
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_lists_board_position ON lists(board_id, position);
         CREATE INDEX IF NOT EXISTS idx_cards_list_position ON cards(list_id, position);",
    )?;

    Ok(())
}
