//! Event CRUD endpoints

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{event_id, required_json, ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::{EventId, EventPatch, EventStatus, NewEvent};
use crate::validation::{parse_list_params, validate_new_event, validate_patch};

/// Response body for a created event
#[derive(Debug, Serialize)]
pub struct CreatedEvent {
    pub id: EventId,
}

/// Body for `PUT /event/:id/status`
#[derive(Debug, Deserialize)]
pub struct StatusChange {
    pub status: EventStatus,
}

/// GET /event - List approved events
///
/// Supports `category` (repeatable), `search`, `date` (DD/MM/YYYY),
/// `location`, and the presentational `format` / `month`.
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ApiError> {
    let filters = parse_list_params(&params)?;
    let events = state.calendar.list(&filters);
    Ok(Json(ApiResponse::new(events)))
}

/// POST /event - Submit a new event (starts pending approval)
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let data: NewEvent = required_json(&body)?;
    validate_new_event(&data)?;

    let id = state.calendar.create(data);
    Ok((StatusCode::CREATED, Json(ApiResponse::new(CreatedEvent { id }))))
}

/// GET /event/:id - Any event by id, whatever its status
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    path: Result<Path<EventId>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = event_id(path)?;
    let event = state.calendar.get(id)?;
    Ok(Json(ApiResponse::new(event)))
}

/// PUT /event/:id - Partial update
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    path: Result<Path<EventId>, PathRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let id = event_id(path)?;
    let patch: EventPatch = required_json(&body)?;
    validate_patch(&patch)?;

    let event = state.calendar.update(id, patch)?;
    Ok(Json(ApiResponse::new(event)))
}

/// DELETE /event/:id
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    path: Result<Path<EventId>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = event_id(path)?;
    if state.calendar.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Event not found".to_string()))
    }
}

/// PUT /event/:id/status - Moderation decision
pub async fn set_event_status(
    State(state): State<Arc<AppState>>,
    path: Result<Path<EventId>, PathRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let id = event_id(path)?;
    let change: StatusChange = required_json(&body)?;

    let event = state.calendar.set_status(id, change.status)?;
    Ok(Json(ApiResponse::new(event)))
}
