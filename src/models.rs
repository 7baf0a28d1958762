//! Frontend Models
//!
//! Data structures matching backend entities.

use board_order::{ItemId, OrderedItem, ParentId};
use serde::{Deserialize, Serialize};

/// Board data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: u32,
    pub name: String,
    pub background_color: String,
}

/// List (column) data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: u32,
    pub board_id: u32,
    pub name: String,
    pub position: f64,
}

/// Card data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: u32,
    pub list_id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub position: f64,
    /// Unix millis
    #[serde(default)]
    pub due_date: Option<i64>,
}

impl OrderedItem for List {
    fn id(&self) -> ItemId {
        self.id
    }

    fn parent_id(&self) -> ParentId {
        self.board_id
    }

    fn sort_key(&self) -> f64 {
        self.position
    }

    fn place(&mut self, parent_id: ParentId, sort_key: f64) {
        self.board_id = parent_id;
        self.position = sort_key;
    }
}

impl OrderedItem for Card {
    fn id(&self) -> ItemId {
        self.id
    }

    fn parent_id(&self) -> ParentId {
        self.list_id
    }

    fn sort_key(&self) -> f64 {
        self.position
    }

    fn place(&mut self, parent_id: ParentId, sort_key: f64) {
        self.list_id = parent_id;
        self.position = sort_key;
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListWithCards {
    #[serde(flatten)]
    pub list: List,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// `GET /api/boards/{id}` payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardDetail {
    #[serde(flatten)]
    pub board: Board,
    #[serde(default)]
    pub lists: Vec<ListWithCards>,
}

impl BoardDetail {
    /// Flatten into the board, all of its lists and all of their cards
    pub fn split(self) -> (Board, Vec<List>, Vec<Card>) {
        let mut lists = Vec::with_capacity(self.lists.len());
        let mut cards = Vec::new();
        for entry in self.lists {
            lists.push(entry.list);
            cards.extend(entry.cards);
        }
        (self.board, lists, cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_order::Projection;

    const DETAIL_JSON: &str = r##"{
        "id": 1,
        "name": "Sprint",
        "backgroundColor": "#0079bf",
        "createdAt": 1700000000000,
        "updatedAt": 1700000000000,
        "lists": [
            {"id": 10, "boardId": 1, "name": "To Do", "position": 0.0, "createdAt": null, "updatedAt": null,
             "cards": [
                {"id": 101, "listId": 10, "name": "B", "description": null, "position": 1.0},
                {"id": 100, "listId": 10, "name": "A", "description": "notes", "position": -0.5, "dueDate": 1700000000000}
             ]},
            {"id": 11, "boardId": 1, "name": "Done", "position": 1.0, "createdAt": null, "updatedAt": null,
             "cards": []}
        ]
    }"##;

    #[test]
    fn test_board_detail_from_server_json() {
        let detail: BoardDetail = serde_json::from_str(DETAIL_JSON).unwrap();
        assert_eq!(detail.board.name, "Sprint");
        assert_eq!(detail.lists.len(), 2);
        assert_eq!(detail.lists[0].cards[1].description.as_deref(), Some("notes"));
        assert_eq!(detail.lists[0].cards[1].due_date, Some(1_700_000_000_000));
        assert_eq!(detail.lists[0].cards[0].due_date, None);
    }

    #[test]
    fn test_split_feeds_projection() {
        let detail: BoardDetail = serde_json::from_str(DETAIL_JSON).unwrap();
        let (board, lists, cards) = detail.split();
        assert_eq!(board.id, 1);
        assert_eq!(lists.len(), 2);
        assert_eq!(cards.len(), 2);

        let mut projection = Projection::new();
        projection.load(cards);
        let names: Vec<_> = projection.sequence(10).iter().map(|c: &Card| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(projection.sequence(11).is_empty());
    }

    #[test]
    fn test_place_moves_card() {
        let mut card = Card {
            id: 1,
            list_id: 10,
            name: "A".to_string(),
            description: None,
            position: 0.0,
            due_date: None,
        };
        card.place(11, 2.5);
        assert_eq!((card.list_id, card.position), (11, 2.5));
        assert_eq!(OrderedItem::parent_id(&card), 11);
    }
}
