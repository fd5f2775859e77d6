//! Date normalization for date controls.
//!
//! Profile dates arrive as ISO-like strings from a month picker; target
//! pages expect full `YYYY-MM-DD` values. Normalization is best-effort and
//! never fails: anything unparsable passes through unchanged.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}$").unwrap()
});

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

const MONTH_YEAR_FORMATS: &[&str] = &["%B %Y", "%b %Y"];

/// Normalize a date string for writing into a date input.
///
/// Bare year-month values ("2021-03") are already what month inputs expect
/// and pass through; full or verbose dates are reformatted to zero-padded
/// `YYYY-MM-DD`; anything else is returned unchanged. Idempotent.
pub fn normalize_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if YEAR_MONTH.is_match(trimmed) {
        return trimmed.to_string();
    }
    match parse_calendar_date(trimmed) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => raw.to_string(),
    }
}

fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }
    // Verbose month-year ("June 2021") maps to the first of the month.
    for format in MONTH_YEAR_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("1 {}", value), &format!("%d {}", format)) {
            return Some(date);
        }
    }
    None
}

#[cfg(test)]
#[path = "dates_tests.rs"]
mod tests;
