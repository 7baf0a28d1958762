//! Board Entity
//!
//! A board owns an ordered set of lists. `BoardDetail` is the nested read
//! model the client renders from.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::entity::Entity;
use super::list::List;

/// Lists every new board starts with, in order
pub const DEFAULT_LISTS: [&str; 3] = ["To Do", "Doing", "Done"];

pub const DEFAULT_BACKGROUND: &str = "#0079bf";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: u32,
    pub name: String,
    pub background_color: String,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Entity for Board {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A list with its cards, both in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListWithCards {
    #[serde(flatten)]
    pub list: List,
    pub cards: Vec<Card>,
}

/// A board with all of its lists and cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardDetail {
    #[serde(flatten)]
    pub board: Board,
    pub lists: Vec<ListWithCards>,
}
