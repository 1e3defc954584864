//! Data types for the events calendar
//!
//! This module contains the event record, request payloads, query filters
//! and the views produced by the calendar service.

mod event;
mod print;
mod query;
mod request;
mod share;

pub use event::{
    Category, Coordinates, DisplayType, Event, EventStatus, EventSummary, GalleryConfig,
};
pub use print::{
    Orientation, PaperSize, PrintConfig, PrintFormat, PrintLayout, PrintPayload, PrintedEvent,
};
pub use query::{
    CategoryFilter, CountdownConfig, FeaturedEvent, HistoryPage, HistoryQuery, ListFilters,
    ListedEvent, PageMetadata, ALL_CATEGORIES_SENTINELS,
};
pub use request::{EventPatch, NewEvent, Patch};
pub use share::{CalendarFormat, SharePlatform};

/// Event identifier
pub type EventId = u64;
