//! Sharing targets

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Facebook,
    Twitter,
    Whatsapp,
    Email,
    #[serde(rename = "calendario", alias = "calendar")]
    Calendar,
    /// Any other value. Resolves to the canonical event link.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarFormat {
    #[default]
    Google,
    Outlook,
    Ical,
}
