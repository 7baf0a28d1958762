//! Card Commands

use serde::Serialize;

use super::{delete, post_json, put_json, CommandError};
use crate::models::Card;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateCardArgs<'a> {
    list_id: u32,
    name: &'a str,
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Empty string clears the description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `Some(None)` clears the due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<i64>>,
}

/// `listId` is only sent when the card changes list
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReorderCardArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    list_id: Option<u32>,
    position: f64,
}

pub async fn create_card(list_id: u32, name: &str) -> Result<Card, CommandError> {
    post_json("/api/cards", &CreateCardArgs { list_id, name }).await
}

pub async fn update_card(id: u32, args: &UpdateCardArgs) -> Result<Card, CommandError> {
    put_json(&format!("/api/cards/{}", id), args).await
}

pub async fn delete_card(id: u32) -> Result<(), CommandError> {
    delete(&format!("/api/cards/{}", id)).await
}

pub async fn reorder_card(id: u32, list_id: Option<u32>, position: f64) -> Result<Card, CommandError> {
    put_json(
        &format!("/api/cards/{}/reorder", id),
        &ReorderCardArgs { list_id, position },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_body_omits_unchanged_list() {
        let same_list = serde_json::to_value(ReorderCardArgs { list_id: None, position: 1.5 }).unwrap();
        assert_eq!(same_list, serde_json::json!({"position": 1.5}));

        let moved = serde_json::to_value(ReorderCardArgs { list_id: Some(4), position: 0.0 }).unwrap();
        assert_eq!(moved, serde_json::json!({"listId": 4, "position": 0.0}));
    }

    #[test]
    fn test_update_body_sends_null_to_clear_due_date() {
        let rename = UpdateCardArgs {
            name: Some("B".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&rename).unwrap(), serde_json::json!({"name": "B"}));

        let clear = UpdateCardArgs {
            due_date: Some(None),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&clear).unwrap(), serde_json::json!({"dueDate": null}));
    }
}
