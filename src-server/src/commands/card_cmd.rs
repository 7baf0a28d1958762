//! Card Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Deserializer};

use super::{check_sort_key, ApiError};
use crate::domain::NewCard;
use crate::repository::{CardChanges, OrderedRepository};
use crate::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    pub list_id: u32,
    pub name: String,
    pub description: Option<String>,
}

/// Absent fields are left alone; `"dueDate": null` clears the due date
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub due_date: Option<Option<i64>>,
}

/// Tells a field sent as `null` apart from one left out
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// New key for a card; `list_id` is only sent when the card changes list
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderCardRequest {
    pub list_id: Option<u32>,
    pub position: f64,
}

/// Append a card to the end of a list
pub async fn create_card(
    State(state): State<SharedState>,
    Json(req): Json<CreateCardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let attrs = NewCard::new(&req.name)?.with_description(req.description);
    let card = state.cards.create(req.list_id, &attrs).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

pub async fn update_card(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
    Json(req): Json<UpdateCardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let changes = CardChanges {
        name: req.name,
        description: req.description,
        due_date: req.due_date,
    };
    let card = state.cards.update_details(id, &changes).await?;
    Ok(Json(card))
}

pub async fn delete_card(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    if state.cards.remove(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("Card {} not found", id)))
    }
}

/// Store a card's new key (and list) as planned by the client
pub async fn reorder_card(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
    Json(req): Json<ReorderCardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let position = check_sort_key(req.position)?;
    let card = state.cards.reposition(id, req.list_id, position).await?;
    log::debug!("Card {} reordered to list {} at {}", id, card.list_id, position);
    Ok(Json(card))
}
