//! Print configuration and payload

use serde::{Deserialize, Serialize};

use super::event::{Event, EventSummary};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrintFormat {
    #[default]
    #[serde(rename = "completo", alias = "full")]
    Full,
    #[serde(rename = "resumido", alias = "summary")]
    Summary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrintLayout {
    #[default]
    #[serde(rename = "padrao", alias = "standard")]
    Standard,
    #[serde(rename = "compacto", alias = "compact")]
    Compact,
    #[serde(rename = "detalhado", alias = "detailed")]
    Detailed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    #[default]
    A4,
    #[serde(rename = "Carta", alias = "Letter")]
    Letter,
    A5,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    #[serde(rename = "retrato", alias = "portrait")]
    Portrait,
    #[serde(rename = "paisagem", alias = "landscape")]
    Landscape,
}

/// Print options; every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintConfig {
    #[serde(default)]
    pub format: PrintFormat,
    #[serde(default = "default_true")]
    pub include_map: bool,
    #[serde(default)]
    pub include_images: bool,
    #[serde(default)]
    pub layout: PrintLayout,
    #[serde(default)]
    pub paper_size: PaperSize,
    #[serde(default)]
    pub orientation: Orientation,
}

fn default_true() -> bool {
    true
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            format: PrintFormat::Full,
            include_map: true,
            include_images: false,
            layout: PrintLayout::Standard,
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
        }
    }
}

/// Event body embedded in a print payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PrintedEvent {
    Full(Box<Event>),
    Summary(EventSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintPayload {
    pub event: PrintedEvent,
    pub config: PrintConfig,
    /// Link encoded into the printed QR code
    pub qr_code: String,
    pub include_map: bool,
    pub include_images: bool,
    pub images: Vec<String>,
}
