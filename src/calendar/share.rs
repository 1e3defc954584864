//! Share links for social platforms and calendar apps

use urlencoding::encode;

use crate::error::CalendarResult;
use crate::types::{CalendarFormat, Event, EventId, SharePlatform};
use crate::utils::time::compact_utc;

use super::Calendar;

/// Build the share link for `platform`.
///
/// A calendar share without a format defaults to Google Calendar. Formats
/// other than Google, and unknown platforms, resolve to the canonical link.
pub fn share_url(
    cal: &Calendar,
    id: EventId,
    platform: SharePlatform,
    calendar_format: Option<CalendarFormat>,
) -> CalendarResult<String> {
    let event = cal.get(id)?;
    let canonical = cal.canonical_url(id);
    let url = build(&event, &canonical, platform, calendar_format.unwrap_or_default());

    tracing::debug!(event_id = id, platform = ?platform, "generated share url");
    Ok(url)
}

fn build(
    event: &Event,
    canonical: &str,
    platform: SharePlatform,
    calendar_format: CalendarFormat,
) -> String {
    let title = encode(&event.title);
    let link = encode(canonical);

    match platform {
        SharePlatform::Facebook => {
            format!("https://www.facebook.com/sharer/sharer.php?u={}", link)
        }
        SharePlatform::Twitter => {
            format!("https://twitter.com/intent/tweet?url={}&text={}", link, title)
        }
        SharePlatform::Whatsapp => format!("https://wa.me/?text={}%20{}", title, link),
        SharePlatform::Email => format!("mailto:?subject={}&body={}", title, link),
        SharePlatform::Calendar if calendar_format == CalendarFormat::Google => format!(
            "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&dates={}/{}&details={}&location={}",
            title,
            compact_utc(&event.start_date),
            compact_utc(&event.end_date),
            encode(&event.description),
            encode(&event.location),
        ),
        SharePlatform::Calendar | SharePlatform::Unknown => canonical.to_string(),
    }
}
