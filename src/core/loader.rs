//! Dataset loader: reads a city file and applies the month/day filters.

use crate::errors::{AppError, AppResult};
use crate::models::table::{REQUIRED_COLUMNS, START_TIME};
use crate::models::{DayFilter, FilterSelection, MonthFilter, TripRow, TripTable};
use crate::utils::time::parse_column_timestamp;
use chrono::{Datelike, Weekday};
use csv::ReaderBuilder;
use std::path::Path;

/// Read a whole city file and derive `month` / `day of week` for every row.
pub fn load_file(path: &Path) -> AppResult<TripTable> {
    let source = path.display().to_string();
    if !path.exists() {
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("data file not found: {}", source),
        )));
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut table = TripTable::new(source, headers);

    for col in REQUIRED_COLUMNS {
        table.require_column(col)?;
    }
    let start_col = table.require_column(START_TIME)?;

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        let raw_start = fields.get(start_col).map(String::as_str).unwrap_or("");
        let start = parse_column_timestamp(START_TIME, raw_start)?;

        table.rows.push(TripRow {
            index,
            fields,
            month: start.month(),
            weekday: weekday_index(start.weekday()),
        });
    }

    tracing::debug!(file = %table.source, rows = table.len(), "data file loaded");
    Ok(table)
}

/// Monday = 0 … Sunday = 6.
pub fn weekday_index(day: Weekday) -> u32 {
    day.num_days_from_monday()
}

/// Keep the rows matching both filters; `All` leaves that axis untouched.
pub fn apply_filters(table: TripTable, month: MonthFilter, day: DayFilter) -> TripTable {
    let before = table.len();
    let filtered = table.retain(|row| month.matches(row.month) && day.matches(row.weekday));
    tracing::debug!(before, after = filtered.len(), %month, %day, "filters applied");
    filtered
}

/// Load the file of the selected city from `data_dir` and filter it.
pub fn load_data(data_dir: &Path, selection: &FilterSelection) -> AppResult<TripTable> {
    let path = data_dir.join(selection.city.file_name());
    tracing::info!(city = %selection.city, path = %path.display(), "loading trips");

    let table = load_file(&path)?;
    Ok(apply_filters(table, selection.month, selection.day))
}
