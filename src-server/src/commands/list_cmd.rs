//! List Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use super::{check_sort_key, ApiError};
use crate::domain::NewList;
use crate::repository::{OrderedRepository, PositioningOperations};
use crate::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
    pub board_id: u32,
    pub name: String,
}

#[derive(Deserialize)]
pub struct RenameListRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct ReorderListRequest {
    pub position: f64,
}

/// Append a list to a board
pub async fn create_list(
    State(state): State<SharedState>,
    Json(req): Json<CreateListRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let attrs = NewList::new(&req.name)?;
    let list = state.lists.create(req.board_id, &attrs).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

pub async fn rename_list(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
    Json(req): Json<RenameListRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let attrs = NewList::new(&req.name)?;
    let list = state.lists.rename(id, &attrs).await?;
    Ok(Json(list))
}

/// Delete a list together with its cards
pub async fn delete_list(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    if state.lists.remove(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("List {} not found", id)))
    }
}

/// Store a list's new key as planned by the client
pub async fn reorder_list(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
    Json(req): Json<ReorderListRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let position = check_sort_key(req.position)?;
    let list = state.lists.reposition(id, None, position).await?;
    log::debug!("List {} reordered to {}", id, position);
    Ok(Json(list))
}

/// The list's cards, ascending by position
pub async fn list_cards(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let cards = state.cards.list_by_parent(id).await?;
    Ok(Json(cards))
}

/// Renumber the list's cards to 0, 1, 2, ...
pub async fn rebalance_cards(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let count = state.cards.rebalance(id).await?;
    Ok(Json(serde_json::json!({"rebalanced": count})))
}
