//! Civic Calendar
//!
//! A municipal events calendar: a REST API for submitting, moderating,
//! listing, sharing, printing and featuring civic events.
//!
//! # Features
//!
//! - **Moderated listings**: only approved events are publicly visible
//! - **Featured events**: up to five upcoming highlights with countdowns
//! - **History**: paginated view over past events
//! - **Share links**: Facebook, Twitter, WhatsApp, e-mail and Google Calendar
//! - **Print payloads**: full or summary print data with a QR link
//!
//! # Modules
//!
//! - `types`: Event record, payloads, filters and views
//! - `store`: Storage trait and the in-memory implementation
//! - `calendar`: Event lifecycle and query service
//! - `validation`: Request validation for the HTTP layer
//! - `api`: Axum router and REST handlers
//! - `config`: Environment-based configuration
//! - `utils`: Clocks and date helpers
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use civic_calendar::{create_router, AppState, Config};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env();
//!     let app = create_router(Arc::new(AppState::from_config(&config)));
//!     let listener = tokio::net::TcpListener::bind((config.host, config.port))
//!         .await
//!         .unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod store;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use api::{create_router, AppState};
pub use calendar::Calendar;
pub use config::Config;
pub use error::{CalendarError, CalendarResult};
pub use store::{EventStore, InMemoryStore};
pub use types::{
    Category, Event, EventId, EventPatch, EventStatus, HistoryQuery, ListFilters, NewEvent, Patch,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
