//! Past events endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::validation::parse_history_params;

/// GET /event/history - Past events, most recent first
///
/// Requires `startDate` and `endDate` (DD/MM/YYYY, at most one year apart).
/// Optional `category`, `search`, `page` (default 1) and `pageSize`
/// (10-100, default 20).
pub async fn list_history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ApiError> {
    let query = parse_history_params(&params)?;
    let page = state.calendar.list_history(&query);
    Ok(Json(ApiResponse::with_metadata(page.data, page.metadata)))
}
