//! List Entity
//!
//! A column on a board. Lists are ordered among their board's lists by
//! `position`.

use board_order::OrderedItem;
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

/// A list (column) belonging to a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: u32,
    pub board_id: u32,
    pub name: String,
    /// Sort key among the board's lists
    pub position: f64,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Attributes for a list about to be created
#[derive(Debug, Clone, PartialEq)]
pub struct NewList {
    pub name: String,
}

impl NewList {
    pub fn new(name: &str) -> DomainResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("List name must not be empty".to_string()));
        }
        Ok(Self { name: name.to_string() })
    }
}

impl Entity for List {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl OrderedItem for List {
    fn id(&self) -> u32 {
        self.id
    }

    fn parent_id(&self) -> u32 {
        self.board_id
    }

    fn sort_key(&self) -> f64 {
        self.position
    }

    fn place(&mut self, parent_id: u32, sort_key: f64) {
        self.board_id = parent_id;
        self.position = sort_key;
    }
}
