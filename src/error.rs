//! Error types for the calendar service.

use crate::types::EventId;

/// Errors surfaced by calendar operations.
///
/// Request validation happens before the calendar is called, so the only
/// failure the core reports is a missing event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// No event has the given id.
    #[error("event {0} not found")]
    NotFound(EventId),
}

/// Result type for calendar operations
pub type CalendarResult<T> = Result<T, CalendarError>;
