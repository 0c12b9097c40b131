use super::{NO_TRIPS, run_section};
use crate::errors::{AppError, AppResult};
use crate::models::TripTable;
use crate::models::table::{END_TIME, START_TIME};
use crate::utils::format_timedelta;
use crate::utils::time::parse_column_timestamp;
use std::io::Write;

/// Total and mean trip duration, in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationStats {
    pub total_nanos: i128,
    pub mean_nanos: i128,
}

/// Per-row `End Time - Start Time`, both parsed from the raw fields.
pub fn trip_durations(table: &TripTable) -> AppResult<Vec<i128>> {
    let start_col = table.require_column(START_TIME)?;
    let end_col = table.require_column(END_TIME)?;

    table
        .values(start_col)
        .zip(table.values(end_col))
        .zip(table.rows.iter())
        .map(|((s, e), row)| {
            let start = parse_column_timestamp(START_TIME, s)?;
            let end = parse_column_timestamp(END_TIME, e)?;
            (end - start)
                .num_nanoseconds()
                .map(i128::from)
                .ok_or(AppError::DurationOverflow(row.index))
        })
        .collect()
}

pub fn compute(table: &TripTable) -> AppResult<Option<DurationStats>> {
    let durations = trip_durations(table)?;
    if durations.is_empty() {
        return Ok(None);
    }

    let total_nanos: i128 = durations.iter().sum();
    Ok(Some(DurationStats {
        total_nanos,
        mean_nanos: total_nanos / durations.len() as i128,
    }))
}

pub fn report<W: Write>(table: &TripTable, out: &mut W, separator: &str) -> AppResult<()> {
    run_section(out, "Trip Duration", separator, |out| {
        match compute(table)? {
            Some(stats) => {
                writeln!(out, "total travel time\n")?;
                writeln!(out, "{}", format_timedelta(stats.total_nanos))?;
                writeln!(out, "mean travel time\n")?;
                writeln!(out, "{}", format_timedelta(stats.mean_nanos))?;
            }
            None => writeln!(out, "{}", NO_TRIPS)?,
        }
        Ok(())
    })
}
