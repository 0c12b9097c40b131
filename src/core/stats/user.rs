use super::{mode, run_section, value_counts};
use crate::errors::{AppError, AppResult};
use crate::models::TripTable;
use crate::models::table::{BIRTH_YEAR, GENDER, USER_TYPE};
use crate::utils::formatting::format_counts;
use std::io::Write;

pub const NO_GENDER: &str = "The data does not contain gender values";
pub const NO_BIRTH_YEAR: &str = "The data does not contain birth year values";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

/// Birth years are stored as floats ("1989.0"); empty cells are skipped.
fn parse_birth_year(value: &str) -> AppResult<Option<i64>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(y) if y.is_finite() => Ok(Some(y.trunc() as i64)),
        _ => Err(AppError::InvalidNumber {
            column: BIRTH_YEAR.to_string(),
            value: value.to_string(),
        }),
    }
}

pub fn user_type_counts(table: &TripTable) -> AppResult<Vec<(String, usize)>> {
    let col = table.require_column(USER_TYPE)?;
    Ok(value_counts(table.values(col)))
}

/// `None` when the table has no `Gender` column.
pub fn gender_counts(table: &TripTable) -> Option<Vec<(String, usize)>> {
    table
        .column(GENDER)
        .map(|col| value_counts(table.values(col)))
}

/// `Ok(None)` when the table has no `Birth Year` column, or when every
/// cell of it is empty.
pub fn birth_year_stats(table: &TripTable) -> AppResult<Option<BirthYearStats>> {
    let Some(col) = table.column(BIRTH_YEAR) else {
        return Ok(None);
    };

    let years: Vec<i64> = table
        .values(col)
        .map(parse_birth_year)
        .filter_map(Result::transpose)
        .collect::<AppResult<_>>()?;

    let earliest = years.iter().copied().min();
    let most_recent = years.iter().copied().max();
    let most_common = mode(years.iter().copied());

    Ok(match (earliest, most_recent, most_common) {
        (Some(earliest), Some(most_recent), Some(most_common)) => Some(BirthYearStats {
            earliest,
            most_recent,
            most_common,
        }),
        _ => None,
    })
}

pub fn report<W: Write>(table: &TripTable, out: &mut W, separator: &str) -> AppResult<()> {
    run_section(out, "User Stats", separator, |out| {
        writeln!(out, "Counts of User Type")?;
        write!(out, "{}", format_counts(&user_type_counts(table)?))?;

        writeln!(out, "Counts of gender")?;
        match gender_counts(table) {
            Some(counts) => write!(out, "{}", format_counts(&counts))?,
            None => writeln!(out, "{}\n", NO_GENDER)?,
        }

        match birth_year_stats(table)? {
            Some(stats) => {
                writeln!(out, "earliest birth year")?;
                writeln!(out, "{}", stats.earliest)?;
                writeln!(out, "most recent birth year")?;
                writeln!(out, "{}", stats.most_recent)?;
                writeln!(out, "most common year of birth")?;
                writeln!(out, "{}", stats.most_common)?;
            }
            None => writeln!(out, "{}\n", NO_BIRTH_YEAR)?,
        }
        Ok(())
    })
}
