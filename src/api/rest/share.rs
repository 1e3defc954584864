//! Share link endpoint

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{event_id, required_json, ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::{CalendarFormat, EventId, SharePlatform};
use crate::validation::ValidationErrors;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    pub platform: SharePlatform,
    #[serde(default)]
    pub calendar_format: Option<CalendarFormat>,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub url: String,
}

/// POST /event/:id/share - Build a share link for one platform
pub async fn share_event(
    State(state): State<Arc<AppState>>,
    path: Result<Path<EventId>, PathRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let id = event_id(path)?;
    let request: ShareRequest = required_json(&body)?;

    if request.platform == SharePlatform::Unknown {
        return Err(ValidationErrors::single(
            "platform",
            "must be one of facebook, twitter, whatsapp, email, calendario",
        )
        .into());
    }

    let url = state
        .calendar
        .share_url(id, request.platform, request.calendar_format)?;
    Ok(Json(ApiResponse::new(ShareResponse { url })))
}
