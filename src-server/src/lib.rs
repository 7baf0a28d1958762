//! Kanban Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: HTTP handlers
//! - server: Router assembly and the serve loop

use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod repository;
pub mod commands;
pub mod server;

use repository::{BoardRepository, CardRepository, DbState, ListRepository};

pub use config::{ConfigError, ServerConfig};
pub use server::{build_router, start_server};

/// Application state shared across handlers
pub struct AppState {
    pub boards: BoardRepository,
    pub lists: ListRepository,
    pub cards: CardRepository,
}

impl AppState {
    pub fn new(db: DbState) -> Self {
        Self {
            boards: BoardRepository::new(db.connection()),
            lists: ListRepository::new(db.connection()),
            cards: CardRepository::new(db.connection()),
        }
    }
}

pub type SharedState = Arc<AppState>;

/// Install logging from `config` and serve until shutdown.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let options = rolling_logger::LoggerOptions::new(config.log_dir.clone(), "kanban")
        .with_filter(&config.log_level);
    // Flushes buffered log lines on the way out
    let _log_guard = rolling_logger::init_with(options)?;

    log::info!("Using database {}", config.db_path.display());
    start_server(config).await
}
