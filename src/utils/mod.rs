//! Utility functions and helpers
//!
//! This module contains clocks and date helpers.

pub mod time;

pub use time::{compact_utc, parse_day, parse_month, Clock, ManualClock, SystemClock};
