//! Domain Layer
//!
//! Boards, the lists ordered inside them and the cards ordered inside lists.
//! Nothing here talks to the database or HTTP; SQLite failures only appear as
//! `DomainError::Database`.

mod entity;
mod board;
mod list;
mod card;

pub use entity::{Entity, DomainError, DomainResult};
pub use board::{Board, BoardDetail, ListWithCards, DEFAULT_LISTS, DEFAULT_BACKGROUND};
pub use list::{List, NewList};
pub use card::{Card, NewCard};
