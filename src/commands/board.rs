//! Board Commands

use serde::Serialize;

use super::{delete, get_json, post_json, CommandError};
use crate::models::{Board, BoardDetail};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardArgs<'a> {
    pub name: &'a str,
    pub background_color: Option<&'a str>,
}

pub async fn list_boards() -> Result<Vec<Board>, CommandError> {
    get_json("/api/boards").await
}

/// Board with its lists and cards
pub async fn get_board(id: u32) -> Result<BoardDetail, CommandError> {
    get_json(&format!("/api/boards/{}", id)).await
}

/// Creates the board with its default lists
pub async fn create_board(args: &CreateBoardArgs<'_>) -> Result<BoardDetail, CommandError> {
    post_json("/api/boards", args).await
}

pub async fn delete_board(id: u32) -> Result<(), CommandError> {
    delete(&format!("/api/boards/{}", id)).await
}
