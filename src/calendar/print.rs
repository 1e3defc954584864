//! Printable event payload

use crate::error::CalendarResult;
use crate::types::{EventId, EventSummary, PrintConfig, PrintFormat, PrintPayload, PrintedEvent};

use super::Calendar;

/// Assemble the data a print renderer needs. `includeMap` is echoed as-is.
pub fn print_version(
    cal: &Calendar,
    id: EventId,
    config: PrintConfig,
) -> CalendarResult<PrintPayload> {
    let event = cal.get(id)?;

    let images = if config.include_images {
        event.images.clone()
    } else {
        Vec::new()
    };
    let include_images = config.include_images && !event.images.is_empty();

    let printed = match config.format {
        PrintFormat::Full => PrintedEvent::Full(Box::new(event)),
        PrintFormat::Summary => PrintedEvent::Summary(EventSummary::from(&event)),
    };

    tracing::debug!(event_id = id, format = ?config.format, "generated print version");

    Ok(PrintPayload {
        event: printed,
        qr_code: cal.canonical_url(id),
        include_map: config.include_map,
        include_images,
        images,
        config,
    })
}
