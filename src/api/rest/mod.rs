//! REST API module for the event endpoints
//!
//! All routes live under `/api/v1/internal`:
//! - `GET /event` - Approved events with filters
//! - `POST /event` - Submit an event for approval
//! - `GET /event/featured` - Upcoming featured events
//! - `GET /event/history` - Past events, paginated
//! - `GET|PUT|DELETE /event/:id` - Single event
//! - `PUT /event/:id/status` - Moderation status
//! - `POST /event/:id/share` - Share link
//! - `POST /event/:id/print` - Print payload

pub mod events;
pub mod featured;
pub mod history;
pub mod print;
pub mod share;

use axum::{
    body::Bytes,
    extract::rejection::PathRejection,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::CalendarError;
use crate::types::{EventId, PageMetadata};
use crate::validation::ValidationErrors;

/// Standard success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PageMetadata>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            metadata: None,
        }
    }

    pub fn with_metadata(data: T, metadata: PageMetadata) -> Self {
        Self {
            success: true,
            data,
            metadata: Some(metadata),
        }
    }
}

/// Errors returned by handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("internal server error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<ValidationErrors>,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    success: bool,
    error: ErrorBody,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Validation failed".to_string(),
                Some(errors),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg, None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, None),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        if status == StatusCode::BAD_REQUEST {
            tracing::warn!(%message, ?details, "rejected request");
        }

        let body = ErrorEnvelope {
            success: false,
            error: ErrorBody {
                message,
                code,
                details,
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<CalendarError> for ApiError {
    fn from(err: CalendarError) -> Self {
        match err {
            CalendarError::NotFound(_) => ApiError::NotFound("Event not found".to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

/// Extract a positive event id from the path
pub(crate) fn event_id(
    path: Result<Path<EventId>, PathRejection>,
) -> Result<EventId, ApiError> {
    match path {
        Ok(Path(id)) if id > 0 => Ok(id),
        _ => Err(ValidationErrors::single("id", "must be a positive integer").into()),
    }
}

/// Parse an optional JSON body; an empty body yields the default value
pub(crate) fn optional_json<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    required_json(body)
}

/// Parse a required JSON body
pub(crate) fn required_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))
}
