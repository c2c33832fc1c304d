//! Request handlers for the note API.
//!
//! Handlers only translate between HTTP and [`NoteService`]: they pull the id
//! and `content` out of the request, call the service, and pick a status code
//! for the outcome.

use std::any::Any;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use memo_service::NoteService;

use crate::error::{ApiError, ApiResult};
use crate::router::endpoints;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

pub async fn info_handler() -> Json<Value> {
    Json(json!({
        "name": "memo",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "notes": endpoints::NOTES,
            "note": endpoints::NOTE,
            "stats": endpoints::STATS,
            "health": endpoints::HEALTH,
        },
    }))
}

pub async fn list_notes(State(service): State<NoteService>) -> Json<Value> {
    let notes = service.get_all_notes();
    Json(json!({
        "success": true,
        "count": notes.len(),
        "data": notes,
    }))
}

pub async fn get_note(
    State(service): State<NoteService>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let note = service
        .get_note(id)
        .map_err(|e| ApiError::not_found(e.to_string()))?;
    Ok(Json(json!({
        "success": true,
        "data": note,
    })))
}

pub async fn create_note(
    State(service): State<NoteService>,
    body: Option<Json<Value>>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let content = content_field(body)?;
    let note = service
        .create_note(content.as_deref())
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Note created successfully",
            "data": note,
        })),
    ))
}

pub async fn update_note(
    State(service): State<NoteService>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> ApiResult<Json<Value>> {
    let content = content_field(body)?;
    let note = service
        .update_note(id, content.as_deref())
        .map_err(|e| {
            if e.is_not_found() {
                ApiError::not_found(e.to_string())
            } else {
                ApiError::bad_request(e.to_string())
            }
        })?;
    Ok(Json(json!({
        "success": true,
        "message": "Note updated successfully",
        "data": note,
    })))
}

pub async fn delete_note(
    State(service): State<NoteService>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let message = service
        .delete_note(id)
        .map_err(|e| ApiError::not_found(e.to_string()))?;
    Ok(Json(json!({
        "success": true,
        "message": message,
    })))
}

pub async fn stats_handler(State(service): State<NoteService>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": service.get_statistics(),
    }))
}

pub async fn not_found_handler() -> ApiError {
    ApiError::not_found("Resource not found")
}

/// Turns a handler panic into the standard 500 envelope.
pub fn panic_handler(_panic: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::internal().into_response()
}

/// Extract the `content` field of a create/update body.
///
/// A missing or unreadable body, or a body without `content`, is a transport
/// error. `null` is forwarded as absent content so the service reports it.
fn content_field(body: Option<Json<Value>>) -> ApiResult<Option<String>> {
    let Some(Json(body)) = body else {
        return Err(ApiError::bad_request("Content is required"));
    };
    match body.get("content") {
        None => Err(ApiError::bad_request("Content is required")),
        Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ApiError::bad_request("Note content must be a string")),
    }
}
