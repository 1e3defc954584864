//! Print payload endpoint

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};

use super::{event_id, optional_json, ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::{EventId, PrintConfig};

/// POST /event/:id/print - Printable event data
///
/// The body is optional; missing fields take their defaults.
pub async fn print_event(
    State(state): State<Arc<AppState>>,
    path: Result<Path<EventId>, PathRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let id = event_id(path)?;
    let config: PrintConfig = optional_json(&body)?;

    let payload = state.calendar.print_version(id, config)?;
    Ok(Json(ApiResponse::new(payload)))
}
