//! Shared application state

use crate::calendar::Calendar;
use crate::config::Config;

/// State shared by every handler
pub struct AppState {
    /// The event calendar
    pub calendar: Calendar,
}

impl AppState {
    pub fn new(calendar: Calendar) -> Self {
        Self { calendar }
    }

    /// In-memory calendar on the wall clock
    pub fn from_config(config: &Config) -> Self {
        Self::new(Calendar::new(config))
    }
}
