//! List Commands

use serde::Serialize;

use super::{delete, post_json, put_json, CommandError};
use crate::models::List;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateListArgs<'a> {
    board_id: u32,
    name: &'a str,
}

#[derive(Serialize)]
struct RenameListArgs<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct ReorderListArgs {
    position: f64,
}

pub async fn create_list(board_id: u32, name: &str) -> Result<List, CommandError> {
    post_json("/api/lists", &CreateListArgs { board_id, name }).await
}

pub async fn rename_list(id: u32, name: &str) -> Result<List, CommandError> {
    put_json(&format!("/api/lists/{}", id), &RenameListArgs { name }).await
}

/// Deletes the list and its cards
pub async fn delete_list(id: u32) -> Result<(), CommandError> {
    delete(&format!("/api/lists/{}", id)).await
}

pub async fn reorder_list(id: u32, position: f64) -> Result<List, CommandError> {
    put_json(&format!("/api/lists/{}/reorder", id), &ReorderListArgs { position }).await
}
