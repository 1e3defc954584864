//! Server configuration loaded from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr};

use chrono::{FixedOffset, Offset, Utc};

/// Default base for canonical event links
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Brasília time, UTC-3
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = -180;

/// Top-level configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL used to build canonical event links (`{base_url}/event/{id}`).
    pub base_url: String,

    /// Host address to bind to.
    pub host: IpAddr,

    /// Port to listen on.
    pub port: u16,

    /// Offset used to derive an event's local calendar day.
    pub utc_offset_minutes: i32,

    /// Log filter directive (e.g. "info", "civic_calendar=debug").
    pub log_level: String,

    /// Emit logs as JSON.
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            host: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 3000,
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Recognised variables: `BASE_URL`, `CALENDAR_HOST`, `CALENDAR_PORT`,
    /// `CALENDAR_UTC_OFFSET_MINUTES`, `CALENDAR_LOG`, `CALENDAR_LOG_JSON`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unparsable values
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get("BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        Self {
            base_url,
            host: parse_or(get("CALENDAR_HOST"), "CALENDAR_HOST", defaults.host),
            port: parse_or(get("CALENDAR_PORT"), "CALENDAR_PORT", defaults.port),
            utc_offset_minutes: parse_or(
                get("CALENDAR_UTC_OFFSET_MINUTES"),
                "CALENDAR_UTC_OFFSET_MINUTES",
                defaults.utc_offset_minutes,
            ),
            log_level: get("CALENDAR_LOG").unwrap_or(defaults.log_level),
            log_json: get("CALENDAR_LOG_JSON")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.log_json),
        }
    }

    /// Local offset as a chrono timezone. Out-of-range values become UTC.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, key: &str, default: T) -> T {
    match value {
        Some(raw) => match raw.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(key, value = %raw, "invalid configuration value, using default");
                default
            }
        },
        None => default,
    }
}
