//! Time utilities: parsing trip timestamps, elapsed-time measurement.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Layouts found in the city files, most common first.
const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
}

/// Like [`parse_timestamp`], but reports which column held the bad value.
pub fn parse_column_timestamp(column: &str, value: &str) -> AppResult<NaiveDateTime> {
    parse_timestamp(value).ok_or_else(|| AppError::InvalidTimestamp {
        column: column.to_string(),
        value: value.to_string(),
    })
}
