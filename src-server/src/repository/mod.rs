//! Repository Layer
//!
//! Data access abstractions and their SQLite implementations.

mod traits;
mod db;
mod positioning;
mod board_repo;
mod list_repo;
mod card_repo;
mod order_writer;


pub use traits::{OrderedRepository, PositioningOperations};
pub use db::{init_db, DbState};
pub use board_repo::BoardRepository;
pub use list_repo::ListRepository;
pub use card_repo::{CardChanges, CardRepository};
pub use order_writer::RepositoryOrderWriter;
