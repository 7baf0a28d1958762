//! Card Entity
//!
//! A card sits in exactly one list and is ordered among that list's cards by
//! `position`. Moving a card to another list changes `list_id`.

use board_order::OrderedItem;
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: u32,
    pub list_id: u32,
    pub name: String,
    /// Optional long-form notes
    pub description: Option<String>,
    /// Sort key among the list's cards
    pub position: f64,
    /// Unix millis; `None` when the card has no deadline
    pub due_date: Option<i64>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Attributes for a card about to be created
#[derive(Debug, Clone, PartialEq)]
pub struct NewCard {
    pub name: String,
    pub description: Option<String>,
}

impl NewCard {
    pub fn new(name: &str) -> DomainResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("Card name must not be empty".to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            description: None,
        })
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }
}

impl Entity for Card {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl OrderedItem for Card {
    fn id(&self) -> u32 {
        self.id
    }

    fn parent_id(&self) -> u32 {
        self.list_id
    }

    fn sort_key(&self) -> f64 {
        self.position
    }

    fn place(&mut self, parent_id: u32, sort_key: f64) {
        self.list_id = parent_id;
        self.position = sort_key;
    }
}
