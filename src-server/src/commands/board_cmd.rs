//! Board Handlers
//!
//! Board CRUD plus the board-scoped list endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use super::ApiError;
use crate::repository::{OrderedRepository, PositioningOperations};
use crate::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    pub name: String,
    pub background_color: Option<String>,
}

/// List all boards
pub async fn list_boards(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let boards = state.boards.list().await?;
    Ok(Json(boards))
}

/// Create a board with its default lists
pub async fn create_board(
    State(state): State<SharedState>,
    Json(req): Json<CreateBoardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = state
        .boards
        .create_with_default_lists(&req.name, req.background_color.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// Board with lists and cards in display order
pub async fn get_board(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    match state.boards.load_detail(id).await? {
        Some(detail) => Ok(Json(detail)),
        None => Err(ApiError::NotFound(format!("Board {} not found", id))),
    }
}

/// Delete a board and everything on it
pub async fn delete_board(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    if state.boards.delete(id).await? {
        log::info!("Deleted board {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("Board {} not found", id)))
    }
}

/// The board's lists, ascending by position
pub async fn list_board_lists(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let lists = state.lists.list_by_parent(id).await?;
    Ok(Json(lists))
}

/// Renumber the board's lists to 0, 1, 2, ...
pub async fn rebalance_lists(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let count = state.lists.rebalance(id).await?;
    Ok(Json(serde_json::json!({"rebalanced": count})))
}
