//! Event record and its enumerated fields

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EventId;

/// Event category (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "cultural")]
    Cultural,
    #[serde(rename = "cívico", alias = "civic")]
    Civic,
    #[serde(rename = "esportivo", alias = "sports")]
    Sports,
    #[serde(rename = "administrativo", alias = "administrative")]
    Administrative,
    #[serde(rename = "educacional", alias = "educational")]
    Educational,
    #[serde(rename = "saúde", alias = "health")]
    Health,
    #[serde(rename = "meio ambiente", alias = "environment")]
    Environment,
    #[serde(rename = "turístico", alias = "tourism")]
    Tourism,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Cultural,
        Category::Civic,
        Category::Sports,
        Category::Administrative,
        Category::Educational,
        Category::Health,
        Category::Environment,
        Category::Tourism,
    ];

    /// Wire name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cultural => "cultural",
            Category::Civic => "cívico",
            Category::Sports => "esportivo",
            Category::Administrative => "administrativo",
            Category::Educational => "educacional",
            Category::Health => "saúde",
            Category::Environment => "meio ambiente",
            Category::Tourism => "turístico",
        }
    }

    fn alias(&self) -> &'static str {
        match self {
            Category::Cultural => "cultural",
            Category::Civic => "civic",
            Category::Sports => "sports",
            Category::Administrative => "administrative",
            Category::Educational => "educational",
            Category::Health => "health",
            Category::Environment => "environment",
            Category::Tourism => "tourism",
        }
    }

    /// Parse a wire name or its English alias (case-insensitive)
    pub fn parse(value: &str) -> Option<Category> {
        let value = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == value || c.alias() == value)
    }
}

/// Moderation status. Only `Approved` events are publicly listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    #[serde(rename = "pendente", alias = "pending")]
    Pending,
    #[serde(rename = "aprovado", alias = "approved")]
    Approved,
    #[serde(rename = "rejeitado", alias = "rejected")]
    Rejected,
    #[serde(rename = "revisão_solicitada", alias = "revision_requested")]
    RevisionRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayType {
    #[serde(rename = "carrossel", alias = "carousel")]
    Carousel,
    #[serde(rename = "grade", alias = "grid")]
    Grid,
    #[serde(rename = "slideshow")]
    Slideshow,
}

/// Image gallery presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryConfig {
    #[serde(default = "default_display_type")]
    pub display_type: DisplayType,
    #[serde(default = "default_true")]
    pub auto_play: bool,
    /// Seconds between slides
    #[serde(default = "default_transition_interval")]
    pub transition_interval: f64,
}

fn default_display_type() -> DisplayType {
    DisplayType::Carousel
}

fn default_true() -> bool {
    true
}

fn default_transition_interval() -> f64 {
    5.0
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            display_type: default_display_type(),
            auto_play: true,
            transition_interval: default_transition_interval(),
        }
    }
}

/// A calendar event as held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
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
    pub ticket_info: Option<String>,
    pub external_link: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub gallery_config: GalleryConfig,
    pub featured: bool,
    pub status: EventStatus,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
}

impl Event {
    pub fn is_approved(&self) -> bool {
        self.status == EventStatus::Approved
    }

    /// Case-insensitive match against title, description or location.
    /// `needle` must already be lowercase.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
    }
}

/// Subset of an event used by summary print-outs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: EventId,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    pub address: String,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            start_date: event.start_date,
            end_date: event.end_date,
            location: event.location.clone(),
            address: event.address.clone(),
        }
    }
}
