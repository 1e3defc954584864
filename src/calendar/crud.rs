//! CRUD operations for the calendar

use chrono::{DateTime, Duration, Utc};

use crate::error::{CalendarError, CalendarResult};
use crate::types::{Event, EventId, EventPatch, EventStatus, NewEvent};

use super::Calendar;

/// Create a new event. Status is always pending and featured always false.
pub fn create(cal: &Calendar, data: NewEvent) -> EventId {
    let now = cal.now();

    let event = Event {
        id: 0,
        title: data.title,
        description: data.description,
        start_date: data.start_date,
        end_date: data.end_date,
        location: data.location,
        address: data.address,
        coordinates: data.coordinates,
        organizer: data.organizer,
        contact: data.contact,
        category: data.category,
        how_to_get_there: data.how_to_get_there,
        ticket_info: data.ticket_info,
        external_link: data.external_link,
        images: data.images,
        gallery_config: data.gallery_config.unwrap_or_default(),
        featured: false,
        status: EventStatus::Pending,
        date_created: now,
        date_modified: now,
    };

    let stored = cal.store.insert(event);
    tracing::info!(event_id = stored.id, title = %stored.title, "event created");
    stored.id
}

pub fn get(cal: &Calendar, id: EventId) -> CalendarResult<Event> {
    cal.store.get(id).ok_or(CalendarError::NotFound(id))
}

/// Apply a partial update (holds the store's write lock for the whole patch)
pub fn update(cal: &Calendar, id: EventId, patch: EventPatch) -> CalendarResult<Event> {
    let now = cal.now();
    let mut patch = Some(patch);

    let updated = cal
        .store
        .update(id, &mut |event| {
            if let Some(patch) = patch.take() {
                apply_patch(event, patch);
                event.date_modified = next_modified(event.date_modified, now);
            }
        })
        .ok_or(CalendarError::NotFound(id))?;

    tracing::info!(event_id = id, "event updated");
    Ok(updated)
}

/// Move an event to another moderation status. Any transition is allowed.
pub fn set_status(cal: &Calendar, id: EventId, status: EventStatus) -> CalendarResult<Event> {
    let now = cal.now();

    let updated = cal
        .store
        .update(id, &mut |event| {
            event.status = status;
            event.date_modified = next_modified(event.date_modified, now);
        })
        .ok_or(CalendarError::NotFound(id))?;

    tracing::info!(event_id = id, status = ?status, "event status changed");
    Ok(updated)
}

pub fn delete(cal: &Calendar, id: EventId) -> bool {
    let removed = cal.store.remove(id);
    if removed {
        tracing::info!(event_id = id, "event deleted");
    }
    removed
}

fn apply_patch(event: &mut Event, patch: EventPatch) {
    patch.title.apply(&mut event.title);
    patch.description.apply(&mut event.description);
    patch.start_date.apply(&mut event.start_date);
    patch.end_date.apply(&mut event.end_date);
    patch.location.apply(&mut event.location);
    patch.address.apply(&mut event.address);
    patch.coordinates.apply(&mut event.coordinates);
    patch.organizer.apply(&mut event.organizer);
    patch.contact.apply(&mut event.contact);
    patch.category.apply(&mut event.category);
    patch.how_to_get_there.apply(&mut event.how_to_get_there);
    patch.ticket_info.apply_nullable(&mut event.ticket_info);
    patch.external_link.apply_nullable(&mut event.external_link);
    patch.images.apply(&mut event.images);
    patch.gallery_config.apply(&mut event.gallery_config);
    patch.featured.apply(&mut event.featured);
}

/// Modification stamps strictly increase, even under a coarse clock
fn next_modified(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}
