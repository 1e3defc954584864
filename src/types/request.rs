//! Create and partial-update payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::event::{Category, Coordinates, GalleryConfig};

/// Payload for creating an event. Id, status, featured flag and timestamps
/// are assigned by the calendar.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub organizer: String,
    pub contact: String,
    pub category: Category,
    pub how_to_get_there: String,
    #[serde(default)]
    pub ticket_info: Option<String>,
    #[serde(default)]
    pub external_link: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub gallery_config: Option<GalleryConfig>,
}

/// Tri-state field of a partial update.
///
/// A field missing from the JSON body deserializes to `Unset`, an explicit
/// `null` to `Null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Unset,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Patch::Null)
    }

    /// Value to validate, if one was supplied
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Overwrite `target` when a value was supplied; `Null` is ignored.
    pub fn apply(self, target: &mut T) {
        if let Patch::Value(v) = self {
            *target = v;
        }
    }

    /// Overwrite a nullable `target`; `Null` clears it.
    pub fn apply_nullable(self, target: &mut Option<T>) {
        match self {
            Patch::Unset => {}
            Patch::Null => *target = None,
            Patch::Value(v) => *target = Some(v),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Patch::Null, Patch::Value)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

/// Partial update. `id`, `status` and `dateCreated` cannot be changed here;
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub start_date: Patch<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Patch<DateTime<Utc>>,
    #[serde(default)]
    pub location: Patch<String>,
    #[serde(default)]
    pub address: Patch<String>,
    #[serde(default)]
    pub coordinates: Patch<Coordinates>,
    #[serde(default)]
    pub organizer: Patch<String>,
    #[serde(default)]
    pub contact: Patch<String>,
    #[serde(default)]
    pub category: Patch<Category>,
    #[serde(default)]
    pub how_to_get_there: Patch<String>,
    #[serde(default)]
    pub ticket_info: Patch<String>,
    #[serde(default)]
    pub external_link: Patch<String>,
    #[serde(default)]
    pub images: Patch<Vec<String>>,
    #[serde(default)]
    pub gallery_config: Patch<GalleryConfig>,
    #[serde(default)]
    pub featured: Patch<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_distinguishes_missing_and_null() {
        let patch: EventPatch =
            serde_json::from_str(r#"{"ticketInfo": null, "title": "Feira"}"#).unwrap();

        assert_eq!(patch.ticket_info, Patch::Null);
        assert_eq!(patch.title, Patch::Value("Feira".to_string()));
        assert!(patch.external_link.is_unset());
        assert!(patch.featured.is_unset());
    }

    #[test]
    fn test_apply_nullable() {
        let mut target = Some("old".to_string());
        Patch::Unset.apply_nullable(&mut target);
        assert_eq!(target.as_deref(), Some("old"));

        Patch::Value("new".to_string()).apply_nullable(&mut target);
        assert_eq!(target.as_deref(), Some("new"));

        Patch::Null.apply_nullable(&mut target);
        assert_eq!(target, None);
    }

    #[test]
    fn test_null_does_not_clear_required_field() {
        let mut title = "Feira".to_string();
        Patch::Null.apply(&mut title);
        assert_eq!(title, "Feira");
    }
}
