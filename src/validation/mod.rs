//! Request validation
//!
//! Runs at the HTTP boundary before the calendar is called: field bounds,
//! URL well-formedness, query parameter parsing and the history period
//! limit. Every problem found is reported, not only the first.

mod event;
mod params;

pub use event::{validate_new_event, validate_patch};
pub use params::{parse_history_params, parse_list_params, MAX_HISTORY_SPAN_DAYS};

use serde::Serialize;

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All problems found in one request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// `Ok(value)` when nothing was recorded
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Check character length of a text field
    pub(crate) fn text(&mut self, field: &str, value: &str, min: usize, max: Option<usize>) {
        let len = value.chars().count();
        if len < min {
            if min == 1 {
                self.push(field, "must not be empty");
            } else {
                self.push(field, format!("must be at least {} characters", min));
            }
        }
        if let Some(max) = max {
            if len > max {
                self.push(field, format!("must be at most {} characters", max));
            }
        }
    }

    /// Check that a value is an absolute URL
    pub(crate) fn url(&mut self, field: &str, value: &str) {
        if url::Url::parse(value).is_err() {
            self.push(field, "must be a valid URL");
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}
