use super::{NO_TRIPS, mode, mode_with_count, run_section};
use crate::errors::AppResult;
use crate::models::TripTable;
use crate::models::table::{END_STATION, START_STATION};
use crate::utils::table::{Column, Table};
use std::io::Write;

const TRIP_HEADING: &str = "most frequent combination of start station and end station trip\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    /// (start, end) of the most frequent trip
    pub trip: (String, String),
    pub trip_count: usize,
}

/// Rows with an empty station name are left out of every count.
pub fn compute(table: &TripTable) -> AppResult<Option<StationStats>> {
    let start_col = table.require_column(START_STATION)?;
    let end_col = table.require_column(END_STATION)?;

    let start_station = mode(table.values(start_col).filter(|v| !v.is_empty()));
    let end_station = mode(table.values(end_col).filter(|v| !v.is_empty()));
    let trip = mode_with_count(
        table
            .values(start_col)
            .zip(table.values(end_col))
            .filter(|(s, e)| !s.is_empty() && !e.is_empty()),
    );

    Ok(match (start_station, end_station, trip) {
        (Some(s), Some(e), Some(((ts, te), count))) => Some(StationStats {
            start_station: s.to_string(),
            end_station: e.to_string(),
            trip: (ts.to_string(), te.to_string()),
            trip_count: count,
        }),
        _ => None,
    })
}

pub fn report<W: Write>(table: &TripTable, out: &mut W, separator: &str) -> AppResult<()> {
    run_section(out, "The Most Popular Stations and Trip", separator, |out| {
        let Some(stats) = compute(table)? else {
            writeln!(out, "{}", NO_TRIPS)?;
            return Ok(());
        };

        writeln!(out, "most commonly used start station\n")?;
        writeln!(out, "{}", stats.start_station)?;
        writeln!(out, "most commonly used end station\n")?;
        writeln!(out, "{}", stats.end_station)?;
        writeln!(out, "{}", TRIP_HEADING)?;

        let mut t = Table::new(vec![
            Column::left(START_STATION),
            Column::left(END_STATION),
            Column::right("trips"),
        ]);
        let row = vec![stats.trip.0, stats.trip.1, stats.trip_count.to_string()];
        t.add_row(row);
        write!(out, "{}", t.render())?;
        Ok(())
    })
}
