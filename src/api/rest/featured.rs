//! Featured events endpoint

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use super::ApiResponse;
use crate::api::state::AppState;

/// GET /event/featured - Up to five upcoming featured events with countdown settings
pub async fn list_featured(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::new(state.calendar.list_featured()))
}
