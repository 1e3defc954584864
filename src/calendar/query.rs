//! Listing queries: public list, featured events and paginated history
//!
//! Only approved events are visible here. Direct lookup by id lives in
//! `crud.rs`.

use chrono::Duration;

use crate::types::{
    CountdownConfig, Event, FeaturedEvent, HistoryPage, HistoryQuery, ListFilters, ListedEvent,
    PageMetadata,
};

use super::{Calendar, COUNTDOWN_WINDOW_DAYS, FEATURED_LIMIT};

fn lowercase_needle(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.to_lowercase())
        .filter(|v| !v.is_empty())
}

/// List approved events matching all supplied filters, in insertion order
pub fn list(cal: &Calendar, filters: &ListFilters) -> Vec<ListedEvent> {
    let now = cal.now();
    let search = lowercase_needle(filters.search.as_ref());
    let location = lowercase_needle(filters.location.as_ref());

    let events = cal.store.scan(&mut |e: &Event| {
        e.is_approved()
            && filters.category.matches(e.category)
            && search.as_deref().map_or(true, |s| e.matches_search(s))
            && filters.date.map_or(true, |day| {
                e.start_date.with_timezone(&cal.utc_offset).date_naive() == day
            })
            && location
                .as_deref()
                .map_or(true, |l| e.location.to_lowercase().contains(l))
    });

    tracing::debug!(count = events.len(), "listed events");

    events
        .into_iter()
        .map(|event| ListedEvent {
            is_past: event.start_date < now,
            event,
        })
        .collect()
}

/// Up to five approved, featured, upcoming events, soonest first
pub fn list_featured(cal: &Calendar) -> Vec<FeaturedEvent> {
    let now = cal.now();
    let countdown_horizon = now + Duration::days(COUNTDOWN_WINDOW_DAYS);

    let mut events = cal
        .store
        .scan(&mut |e: &Event| e.featured && e.is_approved() && e.start_date > now);
    events.sort_by_key(|e| e.start_date);
    events.truncate(FEATURED_LIMIT);

    tracing::debug!(count = events.len(), "listed featured events");

    events
        .into_iter()
        .map(|event| FeaturedEvent {
            show_countdown: event.start_date <= countdown_horizon,
            countdown_config: CountdownConfig::default(),
            event,
        })
        .collect()
}

/// Approved past events, most recent first, one page at a time
pub fn list_history(cal: &Calendar, query: &HistoryQuery) -> HistoryPage {
    let now = cal.now();
    let search = lowercase_needle(query.search.as_ref());

    let mut events = cal.store.scan(&mut |e: &Event| {
        e.is_approved()
            && e.start_date < now
            && query.category.matches(e.category)
            && search.as_deref().map_or(true, |s| e.matches_search(s))
    });
    events.sort_by(|a, b| b.start_date.cmp(&a.start_date));

    let total = events.len();
    let start = query.page.saturating_sub(1).saturating_mul(query.page_size);
    let end = start.saturating_add(query.page_size);

    let data: Vec<Event> = events
        .into_iter()
        .skip(start)
        .take(query.page_size)
        .collect();

    tracing::debug!(total, page = query.page, returned = data.len(), "listed event history");

    HistoryPage {
        data,
        metadata: PageMetadata {
            page: query.page,
            page_size: query.page_size,
            total,
            has_next: end < total,
            has_previous: query.page > 1,
        },
    }
}
