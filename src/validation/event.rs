//! Field bounds for create and update payloads

use crate::types::{EventPatch, NewEvent};

use super::ValidationErrors;

pub const TITLE_MAX: usize = 150;
pub const DESCRIPTION_MAX: usize = 5000;
pub const LOCATION_MAX: usize = 200;
pub const ADDRESS_MAX: usize = 300;
pub const ORGANIZER_MAX: usize = 200;
pub const HOW_TO_GET_THERE_MAX: usize = 1000;
pub const TICKET_INFO_MAX: usize = 1000;
pub const IMAGES_MAX: usize = 20;

fn check_images(errors: &mut ValidationErrors, images: &[String]) {
    if images.len() > IMAGES_MAX {
        errors.push("images", format!("at most {} images are allowed", IMAGES_MAX));
    }
    for (i, image) in images.iter().enumerate() {
        errors.url(&format!("images[{}]", i), image);
    }
}

fn check_transition_interval(errors: &mut ValidationErrors, seconds: f64) {
    if !seconds.is_finite() {
        errors.push("galleryConfig.transitionInterval", "must be a finite number");
    }
}

pub fn validate_new_event(data: &NewEvent) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    errors.text("title", &data.title, 1, Some(TITLE_MAX));
    errors.text("description", &data.description, 1, Some(DESCRIPTION_MAX));
    errors.text("location", &data.location, 1, Some(LOCATION_MAX));
    errors.text("address", &data.address, 1, Some(ADDRESS_MAX));
    errors.text("organizer", &data.organizer, 1, Some(ORGANIZER_MAX));
    errors.text("contact", &data.contact, 1, None);
    errors.text(
        "howToGetThere",
        &data.how_to_get_there,
        1,
        Some(HOW_TO_GET_THERE_MAX),
    );
    if let Some(ticket_info) = &data.ticket_info {
        errors.text("ticketInfo", ticket_info, 0, Some(TICKET_INFO_MAX));
    }
    if let Some(link) = &data.external_link {
        errors.url("externalLink", link);
    }
    check_images(&mut errors, &data.images);
    if let Some(gallery) = &data.gallery_config {
        check_transition_interval(&mut errors, gallery.transition_interval);
    }

    errors.into_result(())
}

/// Only supplied fields are checked. `null` is accepted for `ticketInfo`
/// and `externalLink` alone.
pub fn validate_patch(patch: &EventPatch) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let non_nullable = [
        ("title", patch.title.is_null()),
        ("description", patch.description.is_null()),
        ("startDate", patch.start_date.is_null()),
        ("endDate", patch.end_date.is_null()),
        ("location", patch.location.is_null()),
        ("address", patch.address.is_null()),
        ("coordinates", patch.coordinates.is_null()),
        ("organizer", patch.organizer.is_null()),
        ("contact", patch.contact.is_null()),
        ("category", patch.category.is_null()),
        ("howToGetThere", patch.how_to_get_there.is_null()),
        ("images", patch.images.is_null()),
        ("galleryConfig", patch.gallery_config.is_null()),
        ("featured", patch.featured.is_null()),
    ];
    for (field, is_null) in non_nullable {
        if is_null {
            errors.push(field, "must not be null");
        }
    }

    let texts = [
        ("title", &patch.title, TITLE_MAX),
        ("description", &patch.description, DESCRIPTION_MAX),
        ("location", &patch.location, LOCATION_MAX),
        ("address", &patch.address, ADDRESS_MAX),
        ("organizer", &patch.organizer, ORGANIZER_MAX),
        ("howToGetThere", &patch.how_to_get_there, HOW_TO_GET_THERE_MAX),
    ];
    for (field, value, max) in texts {
        if let Some(value) = value.as_value() {
            errors.text(field, value, 1, Some(max));
        }
    }
    if let Some(contact) = patch.contact.as_value() {
        errors.text("contact", contact, 1, None);
    }
    if let Some(ticket_info) = patch.ticket_info.as_value() {
        errors.text("ticketInfo", ticket_info, 0, Some(TICKET_INFO_MAX));
    }
    if let Some(link) = patch.external_link.as_value() {
        errors.url("externalLink", link);
    }
    if let Some(images) = patch.images.as_value() {
        check_images(&mut errors, images);
    }
    if let Some(gallery) = patch.gallery_config.as_value() {
        check_transition_interval(&mut errors, gallery.transition_interval);
    }

    errors.into_result(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Patch;

    fn payload() -> serde_json::Value {
        serde_json::json!({
            "title": "Feira de Artesanato",
            "description": "Artesãos locais",
            "startDate": "2025-05-01T13:00:00Z",
            "endDate": "2025-05-01T18:00:00Z",
            "location": "Praça da Matriz",
            "address": "Rua da Matriz, s/n",
            "coordinates": { "latitude": -8.05, "longitude": -34.9 },
            "organizer": "Secretaria de Turismo",
            "contact": "turismo@cidade.gov.br",
            "category": "turístico",
            "howToGetThere": "Linha 12"
        })
    }

    #[test]
    fn test_valid_payload() {
        let data: NewEvent = serde_json::from_value(payload()).unwrap();
        assert!(validate_new_event(&data).is_ok());
    }

    #[test]
    fn test_collects_every_problem() {
        let mut json = payload();
        json["title"] = serde_json::json!("");
        json["externalLink"] = serde_json::json!("cidade.gov.br");
        json["images"] = serde_json::json!(vec!["https://img.example/a.png"; 21]);
        let data: NewEvent = serde_json::from_value(json).unwrap();

        let errors = validate_new_event(&data).unwrap_err();
        assert!(errors.has("title"));
        assert!(errors.has("externalLink"));
        assert!(errors.has("images"));
    }

    #[test]
    fn test_title_length_limit() {
        let mut json = payload();
        json["title"] = serde_json::json!("x".repeat(151));
        let data: NewEvent = serde_json::from_value(json).unwrap();
        assert!(validate_new_event(&data).unwrap_err().has("title"));
    }

    #[test]
    fn test_patch_checks_only_supplied_fields() {
        assert!(validate_patch(&EventPatch::default()).is_ok());

        let patch = EventPatch {
            title: Patch::Value(String::new()),
            external_link: Patch::Null,
            ..EventPatch::default()
        };
        let errors = validate_patch(&patch).unwrap_err();
        assert!(errors.has("title"));
        assert!(!errors.has("externalLink"));
    }

    #[test]
    fn test_patch_rejects_null_on_required_fields() {
        let patch: EventPatch = serde_json::from_str(
            r#"{"title": null, "featured": null, "images": null, "ticketInfo": null}"#,
        )
        .unwrap();

        let errors = validate_patch(&patch).unwrap_err();
        assert!(errors.has("title"));
        assert!(errors.has("featured"));
        assert!(errors.has("images"));
        assert!(!errors.has("ticketInfo"));
    }
}
