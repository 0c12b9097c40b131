use super::{NO_TRIPS, mode, run_section};
use crate::core::loader::weekday_index;
use crate::errors::AppResult;
use crate::models::TripTable;
use crate::models::filters::day_name;
use crate::models::table::START_TIME;
use crate::utils::time::parse_column_timestamp;
use chrono::{Datelike, Timelike};
use std::io::Write;

/// Most frequent times of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    pub month: u32,
    /// Days from Monday
    pub weekday: u32,
    pub hour: u32,
}

/// Re-reads `Start Time` from the raw fields; `None` for an empty table.
pub fn compute(table: &TripTable) -> AppResult<Option<TimeStats>> {
    let col = table.require_column(START_TIME)?;
    let starts = table
        .values(col)
        .map(|v| parse_column_timestamp(START_TIME, v))
        .collect::<AppResult<Vec<_>>>()?;

    let month = mode(starts.iter().map(|t| t.month()));
    let weekday = mode(starts.iter().map(|t| weekday_index(t.weekday())));
    let hour = mode(starts.iter().map(|t| t.hour()));

    Ok(match (month, weekday, hour) {
        (Some(month), Some(weekday), Some(hour)) => Some(TimeStats {
            month,
            weekday,
            hour,
        }),
        _ => None,
    })
}

pub fn report<W: Write>(table: &TripTable, out: &mut W, separator: &str) -> AppResult<()> {
    run_section(out, "The Most Frequent Times of Travel", separator, |out| {
        match compute(table)? {
            Some(stats) => {
                writeln!(out, "the most common month")?;
                writeln!(out, "{}", stats.month)?;
                writeln!(out, "the most common day of week")?;
                writeln!(out, "{}", day_name(stats.weekday))?;
                writeln!(out, "the most common start hour")?;
                writeln!(out, "{}", stats.hour)?;
            }
            None => writeln!(out, "{}", NO_TRIPS)?,
        }
        Ok(())
    })
}
