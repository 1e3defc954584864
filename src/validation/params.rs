//! Query string parsing for listing endpoints
//!
//! Parameters arrive as raw key/value pairs so that `category` can be
//! repeated (`category=a&category=b`), bracketed (`category[]=a`) or
//! comma-separated (`category=a,b`).

use crate::types::{CategoryFilter, HistoryQuery, ListFilters};
use crate::utils::time::{parse_day, parse_month};

use super::ValidationErrors;

pub const SEARCH_MAX: usize = 100;
pub const LOCATION_FILTER_MAX: usize = 100;
pub const MAX_HISTORY_SPAN_DAYS: i64 = 365;
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MIN_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

const LIST_FORMATS: &[&str] = &["mensal", "semanal", "lista"];

/// Last non-empty value for `key`
fn single<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(k, v)| k == key && !v.trim().is_empty())
        .map(|(_, v)| v.trim())
}

/// Last non-empty value for `key`, kept verbatim
fn verbatim<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.as_str())
}

fn categories(pairs: &[(String, String)]) -> CategoryFilter {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(k, _)| k == "category" || k == "category[]")
        .flat_map(|(_, v)| v.split(','))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();
    CategoryFilter::from_values(values)
}

fn search_term(
    errors: &mut ValidationErrors,
    pairs: &[(String, String)],
    key: &str,
    max: usize,
) -> Option<String> {
    let value = verbatim(pairs, key)?;
    errors.text(key, value, 0, Some(max));
    Some(value.to_string())
}

fn number(
    errors: &mut ValidationErrors,
    pairs: &[(String, String)],
    key: &str,
    default: usize,
    min: usize,
    max: Option<usize>,
) -> usize {
    let Some(raw) = single(pairs, key) else {
        return default;
    };
    match raw.parse::<usize>() {
        Ok(n) if n < min => {
            errors.push(key, format!("must be at least {}", min));
            default
        }
        Ok(n) => match max {
            Some(max) if n > max => {
                errors.push(key, format!("must be at most {}", max));
                default
            }
            _ => n,
        },
        Err(_) => {
            errors.push(key, "must be a positive integer");
            default
        }
    }
}

/// Parse `GET /event` parameters.
///
/// `format` and `month` are checked for well-formedness only; the listing
/// itself is not narrowed by them.
pub fn parse_list_params(pairs: &[(String, String)]) -> Result<ListFilters, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(format) = single(pairs, "format") {
        if !LIST_FORMATS.contains(&format) {
            errors.push("format", format!("must be one of {:?}", LIST_FORMATS));
        }
    }
    if let Some(month) = single(pairs, "month") {
        if parse_month(month).is_none() {
            errors.push("month", "must be MM/YYYY");
        }
    }

    let date = match single(pairs, "date") {
        Some(raw) => {
            let parsed = parse_day(raw);
            if parsed.is_none() {
                errors.push("date", "must be DD/MM/YYYY");
            }
            parsed
        }
        None => None,
    };

    let filters = ListFilters {
        category: categories(pairs),
        search: search_term(&mut errors, pairs, "search", SEARCH_MAX),
        date,
        location: search_term(&mut errors, pairs, "location", LOCATION_FILTER_MAX),
    };

    errors.into_result(filters)
}

/// Parse `GET /event/history` parameters, including the period check
pub fn parse_history_params(pairs: &[(String, String)]) -> Result<HistoryQuery, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let mut period_bound = |key: &str| match single(pairs, key) {
        Some(raw) => {
            let parsed = parse_day(raw);
            if parsed.is_none() {
                errors.push(key, "must be DD/MM/YYYY");
            }
            parsed
        }
        None => {
            errors.push(key, "is required");
            None
        }
    };
    let start = period_bound("startDate");
    let end = period_bound("endDate");

    if let (Some(start), Some(end)) = (start, end) {
        if (end - start).num_days() > MAX_HISTORY_SPAN_DAYS {
            errors.push("endDate", "Search period cannot exceed 1 year");
        }
    }

    let query = HistoryQuery {
        category: categories(pairs),
        search: search_term(&mut errors, pairs, "search", SEARCH_MAX),
        page: number(&mut errors, pairs, "page", 1, 1, None),
        page_size: number(
            &mut errors,
            pairs,
            "pageSize",
            DEFAULT_PAGE_SIZE,
            MIN_PAGE_SIZE,
            Some(MAX_PAGE_SIZE),
        ),
    };

    errors.into_result(query)
}
