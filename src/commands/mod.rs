//! Server Command Wrappers
//!
//! Frontend bindings to the kanban REST API, organized by domain.

mod board;
mod card;
mod list;
mod order;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use board::*;
pub use card::*;
pub use list::*;
pub use order::{CardOrderWriter, ListOrderWriter};

/// Used when the page location has no usable origin
const FALLBACK_ORIGIN: &str = "http://127.0.0.1:3170";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
}

impl CommandError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CommandError::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for CommandError {
    fn from(err: reqwest::Error) -> Self {
        CommandError::Request(err.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// `origin` + `path`, without doubling the slash
pub(crate) fn join_url(origin: &str, path: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Absolute URL for an API path, relative to the page's origin
pub(crate) fn api_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|win| win.location().origin().ok())
        .unwrap_or_else(|| FALLBACK_ORIGIN.to_string());
    join_url(&origin, path)
}

/// Turn a non-2xx response into `CommandError::Status`
async fn check(resp: reqwest::Response) -> Result<reqwest::Response, CommandError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);
    Err(CommandError::Status {
        status: status.as_u16(),
        message,
    })
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, CommandError> {
    let resp = reqwest::Client::new().get(api_url(path)).send().await?;
    Ok(check(resp).await?.json::<T>().await?)
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, CommandError> {
    let resp = reqwest::Client::new().post(api_url(path)).json(body).send().await?;
    Ok(check(resp).await?.json::<T>().await?)
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, CommandError> {
    let resp = reqwest::Client::new().put(api_url(path)).json(body).send().await?;
    Ok(check(resp).await?.json::<T>().await?)
}

pub(crate) async fn delete(path: &str) -> Result<(), CommandError> {
    let resp = reqwest::Client::new().delete(api_url(path)).send().await?;
    check(resp).await?;
    Ok(())
}
