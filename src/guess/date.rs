//! Birth date display formatting

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors from [`format_date`]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateFormatError {
    #[error("Malformed date {0:?}: expected YYYY-MM-DD")]
    Malformed(String),
}

fn iso_date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("date pattern is a valid regex")
    })
}

/// Reorder a `YYYY-MM-DD` date-picker value into `DD/MM/YYYY`.
///
/// Pure field reordering: no timezone conversion and no calendar check.
/// Anything not in the four-two-two digit shape is rejected.
pub fn format_date(iso_date: &str) -> Result<String, DateFormatError> {
    let caps = iso_date_pattern()
        .captures(iso_date)
        .ok_or_else(|| DateFormatError::Malformed(iso_date.to_string()))?;

    Ok(format!("{}/{}/{}", &caps[3], &caps[2], &caps[1]))
}
