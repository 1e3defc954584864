//! HTTP server setup with Axum

use std::any::Any;
use std::sync::Arc;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::rest::{events, featured, history, print, share, ApiError};
use super::state::AppState;

/// Prefix for every event route
pub const API_PREFIX: &str = "/api/v1/internal";

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - the calendar front-end is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let event_routes = Router::new()
        .route("/event", get(events::list_events).post(events::create_event))
        .route("/event/featured", get(featured::list_featured))
        .route("/event/history", get(history::list_history))
        .route(
            "/event/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route("/event/:id/status", put(events::set_event_status))
        .route("/event/:id/share", post(share::share_event))
        .route("/event/:id/print", post(print::print_event));

    Router::new()
        .route("/health", get(health_check))
        .nest(API_PREFIX, event_routes)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Internal(detail).into_response()
}
