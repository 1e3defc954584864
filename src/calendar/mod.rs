//! Calendar - event lifecycle and query service
//!
//! This module owns every read and write on the event collection. Callers
//! validate requests first; the calendar only reports missing events.

mod crud;
mod print;
mod query;
mod share;

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};

use crate::config::Config;
use crate::error::CalendarResult;
use crate::store::{EventStore, InMemoryStore};
use crate::types::{
    CalendarFormat, Event, EventId, EventPatch, EventStatus, FeaturedEvent, HistoryPage,
    HistoryQuery, ListFilters, ListedEvent, NewEvent, PrintConfig, PrintPayload, SharePlatform,
};
use crate::utils::time::{Clock, SystemClock};

/// Maximum number of featured events returned
pub const FEATURED_LIMIT: usize = 5;

/// Featured events starting within this many days show a countdown
pub const COUNTDOWN_WINDOW_DAYS: i64 = 30;

/// Event calendar backed by a pluggable store
pub struct Calendar {
    pub(crate) store: Arc<dyn EventStore>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) base_url: String,
    pub(crate) utc_offset: FixedOffset,
}

impl Calendar {
    /// Create an in-memory calendar using the wall clock
    pub fn new(config: &Config) -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()), Arc::new(SystemClock), config)
    }

    /// Create a calendar over an explicit store and clock
    pub fn with_store(store: Arc<dyn EventStore>, clock: Arc<dyn Clock>, config: &Config) -> Self {
        Self {
            store,
            clock,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            utc_offset: config.utc_offset(),
        }
    }

    /// Stable public link for an event
    pub fn canonical_url(&self, id: EventId) -> String {
        format!("{}/event/{}", self.base_url, id)
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Number of stored events, in any status
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Calendar {
    // CRUD operations (from crud.rs)
    pub fn create(&self, data: NewEvent) -> EventId {
        crud::create(self, data)
    }

    pub fn get(&self, id: EventId) -> CalendarResult<Event> {
        crud::get(self, id)
    }

    pub fn update(&self, id: EventId, patch: EventPatch) -> CalendarResult<Event> {
        crud::update(self, id, patch)
    }

    pub fn set_status(&self, id: EventId, status: EventStatus) -> CalendarResult<Event> {
        crud::set_status(self, id, status)
    }

    pub fn delete(&self, id: EventId) -> bool {
        crud::delete(self, id)
    }

    // Query operations (from query.rs)
    pub fn list(&self, filters: &ListFilters) -> Vec<ListedEvent> {
        query::list(self, filters)
    }

    pub fn list_featured(&self) -> Vec<FeaturedEvent> {
        query::list_featured(self)
    }

    pub fn list_history(&self, query: &HistoryQuery) -> HistoryPage {
        query::list_history(self, query)
    }

    // Derived artifacts (from share.rs / print.rs)
    pub fn share_url(
        &self,
        id: EventId,
        platform: SharePlatform,
        calendar_format: Option<CalendarFormat>,
    ) -> CalendarResult<String> {
        share::share_url(self, id, platform, calendar_format)
    }

    pub fn print_version(&self, id: EventId, config: PrintConfig) -> CalendarResult<PrintPayload> {
        print::print_version(self, id, config)
    }
}
