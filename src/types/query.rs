//! Query filters and the annotated views returned by listings

use chrono::NaiveDate;
use serde::Serialize;

use super::event::{Category, Event};

/// Reserved category values meaning "no category filtering"
pub const ALL_CATEGORIES_SENTINELS: &[&str] = &["todos", "all"];

/// Category restriction for listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Vec<Category>),
}

impl CategoryFilter {
    /// Build from raw query values.
    ///
    /// An empty list or one containing the "all" sentinel disables filtering.
    /// Unknown names are dropped, so a filter made only of unknown names
    /// matches nothing.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<S> = values.into_iter().collect();
        if values.is_empty() {
            return CategoryFilter::All;
        }

        let has_sentinel = values.iter().any(|v| {
            let v = v.as_ref().trim();
            ALL_CATEGORIES_SENTINELS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(v))
        });
        if has_sentinel {
            return CategoryFilter::All;
        }

        CategoryFilter::Only(
            values
                .iter()
                .filter_map(|v| Category::parse(v.as_ref()))
                .collect(),
        )
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(set) => set.contains(&category),
        }
    }
}

/// Filters for the public event listing. All filters are ANDed.
#[derive(Debug, Clone, Default)]
pub struct ListFilters {
    pub category: CategoryFilter,
    /// Substring of title, description or location
    pub search: Option<String>,
    /// Local calendar day of the start date
    pub date: Option<NaiveDate>,
    /// Substring of location
    pub location: Option<String>,
}

/// Filters and page selection for past events
#[derive(Debug, Clone)]
pub struct HistoryQuery {
    pub category: CategoryFilter,
    pub search: Option<String>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            search: None,
            page: 1,
            page_size: 20,
        }
    }
}

/// Event as returned by the public listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedEvent {
    #[serde(flatten)]
    pub event: Event,
    pub is_past: bool,
}

/// Countdown widget settings attached to featured events
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownConfig {
    pub display_format: String,
    pub highlight_color: String,
    pub show_seconds: bool,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            display_format: "completo".to_string(),
            highlight_color: "#FF4500".to_string(),
            show_seconds: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedEvent {
    #[serde(flatten)]
    pub event: Event,
    /// Start is within the next 30 days
    pub show_countdown: bool,
    pub countdown_config: CountdownConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryPage {
    pub data: Vec<Event>,
    pub metadata: PageMetadata,
}
