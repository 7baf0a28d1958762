//! Commands Layer
//!
//! HTTP handlers that bridge the browser client to the repositories.

mod board_cmd;
mod card_cmd;
mod list_cmd;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};

use crate::domain::DomainError;
use crate::SharedState;

pub use board_cmd::*;
pub use card_cmd::*;
pub use list_cmd::*;

// ── Error handling ────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(serde_json::json!({"error": message}))).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => ApiError::NotFound(msg),
            DomainError::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => {
                log::error!("Request failed: {}", other);
                ApiError::Internal(other.to_string())
            }
        }
    }
}

/// Reject keys JSON cannot carry back to the client
pub(crate) fn check_sort_key(position: f64) -> Result<f64, ApiError> {
    if position.is_finite() {
        Ok(position)
    } else {
        Err(ApiError::BadRequest(format!("Invalid position {}", position)))
    }
}

// ── Router ────────────────────────────────────────────────────────────

pub fn api_router() -> Router<SharedState> {
    Router::new()
        .route("/api/boards", get(list_boards).post(create_board))
        .route("/api/boards/{id}", get(get_board).delete(delete_board))
        .route("/api/boards/{id}/lists", get(list_board_lists))
        .route("/api/boards/{id}/lists/rebalance", post(rebalance_lists))
        .route("/api/lists", post(create_list))
        .route("/api/lists/{id}", put(rename_list).delete(delete_list))
        .route("/api/lists/{id}/reorder", put(reorder_list))
        .route("/api/lists/{id}/cards", get(list_cards))
        .route("/api/lists/{id}/cards/rebalance", post(rebalance_cards))
        .route("/api/cards", post(create_card))
        .route("/api/cards/{id}", put(update_card).delete(delete_card))
        .route("/api/cards/{id}/reorder", put(reorder_card))
        .route("/health", get(health_check))
}

async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::repository::init_db;
    use crate::AppState;

    fn test_router() -> Router {
        let db = init_db(Path::new(":memory:")).unwrap();
        api_router().with_state(Arc::new(AppState::new(db)))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    /// Create a board and return (board id, first list id)
    async fn seed_board(app: &Router) -> (u64, u64) {
        let (status, board) = send(app, "POST", "/api/boards", Some(json!({"name": "Sprint"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        (
            board["id"].as_u64().unwrap(),
            board["lists"][0]["id"].as_u64().unwrap(),
        )
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_router();
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_board_returns_default_lists() {
        let app = test_router();
        let (status, board) = send(&app, "POST", "/api/boards", Some(json!({"name": "Sprint"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(board["name"], "Sprint");
        assert_eq!(board["backgroundColor"], "#0079bf");
        let lists = board["lists"].as_array().unwrap();
        assert_eq!(lists.len(), 3);
        assert_eq!(lists[2]["name"], "Done");
        assert_eq!(lists[2]["position"], 2.0);

        let (status, boards) = send(&app, "GET", "/api/boards", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(boards.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_board_name_is_bad_request() {
        let app = test_router();
        let (status, body) = send(&app, "POST", "/api/boards", Some(json!({"name": " "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("empty"));
    }

    #[tokio::test]
    async fn test_missing_board_is_not_found() {
        let app = test_router();
        let (status, body) = send(&app, "GET", "/api/boards/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Board 42 not found");

        let (status, _) = send(&app, "DELETE", "/api/boards/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cards_append_and_reorder() {
        let app = test_router();
        let (_, list_id) = seed_board(&app).await;

        for name in ["A", "B", "C"] {
            let (status, card) = send(&app, "POST", "/api/cards", Some(json!({"listId": list_id, "name": name}))).await;
            assert_eq!(status, StatusCode::CREATED);
            assert_eq!(card["listId"], list_id);
        }

        let (_, cards) = send(&app, "GET", &format!("/api/lists/{}/cards", list_id), None).await;
        let c_id = cards[2]["id"].as_u64().unwrap();
        assert_eq!(cards[2]["position"], 2.0);

        let (status, moved) = send(
            &app,
            "PUT",
            &format!("/api/cards/{}/reorder", c_id),
            Some(json!({"position": -1.0})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(moved["position"], -1.0);

        let (_, cards) = send(&app, "GET", &format!("/api/lists/{}/cards", list_id), None).await;
        let names: Vec<_> = cards.as_array().unwrap().iter().map(|c| c["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_card_moves_between_lists() {
        let app = test_router();
        let (status, board) = send(&app, "POST", "/api/boards", Some(json!({"name": "Sprint"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        let todo = board["lists"][0]["id"].as_u64().unwrap();
        let doing = board["lists"][1]["id"].as_u64().unwrap();

        let (_, card) = send(&app, "POST", "/api/cards", Some(json!({"listId": todo, "name": "A"}))).await;
        let card_id = card["id"].as_u64().unwrap();

        let (status, moved) = send(
            &app,
            "PUT",
            &format!("/api/cards/{}/reorder", card_id),
            Some(json!({"listId": doing, "position": 0.0})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(moved["listId"], doing);

        let (_, detail) = send(&app, "GET", &format!("/api/boards/{}", board["id"]), None).await;
        assert!(detail["lists"][0]["cards"].as_array().unwrap().is_empty());
        assert_eq!(detail["lists"][1]["cards"][0]["name"], "A");
    }

    #[tokio::test]
    async fn test_update_card_due_date() {
        let app = test_router();
        let (_, list_id) = seed_board(&app).await;
        let (_, card) = send(&app, "POST", "/api/cards", Some(json!({"listId": list_id, "name": "A"}))).await;
        assert_eq!(card["dueDate"], Value::Null);
        let uri = format!("/api/cards/{}", card["id"]);

        let (status, dated) = send(&app, "PUT", &uri, Some(json!({"dueDate": 1700000000000i64}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(dated["dueDate"], 1700000000000i64);
        assert_eq!(dated["name"], "A");

        // Renaming leaves the due date alone
        let (_, renamed) = send(&app, "PUT", &uri, Some(json!({"name": "B"}))).await;
        assert_eq!(renamed["dueDate"], 1700000000000i64);

        let (_, cleared) = send(&app, "PUT", &uri, Some(json!({"dueDate": null}))).await;
        assert_eq!(cleared["dueDate"], Value::Null);
        assert_eq!(cleared["name"], "B");
    }

    #[tokio::test]
    async fn test_reorder_missing_items_is_not_found() {
        let app = test_router();
        let (status, body) = send(&app, "PUT", "/api/cards/999/reorder", Some(json!({"position": 1.0}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Card 999 not found");

        let (status, _) = send(&app, "PUT", "/api/lists/999/reorder", Some(json!({"position": 1.0}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_reorder_and_delete() {
        let app = test_router();
        let (board_id, first_list) = seed_board(&app).await;
        send(&app, "POST", "/api/cards", Some(json!({"listId": first_list, "name": "A"}))).await;

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/api/lists/{}/reorder", first_list),
            Some(json!({"position": 10.0})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, lists) = send(&app, "GET", &format!("/api/boards/{}/lists", board_id), None).await;
        let names: Vec<_> = lists.as_array().unwrap().iter().map(|l| l["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Doing", "Done", "To Do"]);

        let (status, _) = send(&app, "DELETE", &format!("/api/lists/{}", first_list), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, cards) = send(&app, "GET", &format!("/api/lists/{}/cards", first_list), None).await;
        assert!(cards.as_array().unwrap().is_empty());

        let (status, _) = send(&app, "DELETE", &format!("/api/lists/{}", first_list), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_list_appends() {
        let app = test_router();
        let (board_id, _) = seed_board(&app).await;

        let (status, list) = send(&app, "POST", "/api/lists", Some(json!({"boardId": board_id, "name": "Later"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(list["position"], 3.0);

        let (status, renamed) = send(
            &app,
            "PUT",
            &format!("/api/lists/{}", list["id"]),
            Some(json!({"name": "Someday"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(renamed["name"], "Someday");

        let (status, _) = send(&app, "POST", "/api/lists", Some(json!({"boardId": 999, "name": "Lost"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_card_details() {
        let app = test_router();
        let (_, list_id) = seed_board(&app).await;
        let (_, card) = send(&app, "POST", "/api/cards", Some(json!({"listId": list_id, "name": "A"}))).await;

        let (status, updated) = send(
            &app,
            "PUT",
            &format!("/api/cards/{}", card["id"]),
            Some(json!({"description": "details"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "A");
        assert_eq!(updated["description"], "details");

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/api/cards/{}", card["id"]),
            Some(json!({"name": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rebalance_cards() {
        let app = test_router();
        let (_, list_id) = seed_board(&app).await;
        let (_, a) = send(&app, "POST", "/api/cards", Some(json!({"listId": list_id, "name": "A"}))).await;
        send(&app, "POST", "/api/cards", Some(json!({"listId": list_id, "name": "B"}))).await;
        send(
            &app,
            "PUT",
            &format!("/api/cards/{}/reorder", a["id"]),
            Some(json!({"position": 1.5})),
        )
        .await;

        let (status, body) = send(&app, "POST", &format!("/api/lists/{}/cards/rebalance", list_id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rebalanced"], 2);

        let (_, cards) = send(&app, "GET", &format!("/api/lists/{}/cards", list_id), None).await;
        assert_eq!(cards[0]["name"], "B");
        assert_eq!(cards[0]["position"], 0.0);
        assert_eq!(cards[1]["position"], 1.0);
    }

    #[test]
    fn test_non_finite_position_rejected() {
        assert!(check_sort_key(0.5).is_ok());
        assert!(matches!(check_sort_key(f64::NAN), Err(ApiError::BadRequest(_))));
        assert!(matches!(check_sort_key(f64::INFINITY), Err(ApiError::BadRequest(_))));
    }
}
