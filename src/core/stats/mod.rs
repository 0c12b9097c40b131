//! Statistics reporters and the aggregate helpers they share.
//!
//! Tie-break policy for every "most common" value: the highest count wins,
//! and among equal counts the lowest value (numeric or lexicographic) wins.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use crate::errors::AppResult;
use crate::models::TripTable;
use std::collections::BTreeMap;
use std::io::Write;
use std::time::Instant;

pub const NO_TRIPS: &str = "No trips match the selected filters.";

/// Occurrence count of every distinct value, in ascending value order.
pub fn count_values<T, I>(values: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value with its count; `None` for an empty input.
pub fn mode_with_count<T, I>(values: I) -> Option<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    // ascending key order: a later key only wins with a strictly higher count
    for (value, count) in count_values(values) {
        if best.as_ref().is_none_or(|(_, c)| count > *c) {
            best = Some((value, count));
        }
    }
    best
}

pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    mode_with_count(values).map(|(v, _)| v)
}

/// Counts per distinct non-empty value, most frequent first.
pub fn value_counts<'a, I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let non_empty = values.into_iter().filter(|v| !v.is_empty());
    let mut counts: Vec<(String, usize)> = count_values(non_empty)
        .into_iter()
        .map(|(v, c)| (v.to_string(), c))
        .collect();
    // stable: equal counts keep ascending value order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Print a report section: title, body, elapsed time, separator.
pub fn run_section<W, F>(out: &mut W, title: &str, separator: &str, body: F) -> AppResult<()>
where
    W: Write,
    F: FnOnce(&mut W) -> AppResult<()>,
{
    writeln!(out, "\nCalculating {}...\n", title)?;
    let start = Instant::now();

    body(out)?;

    let elapsed = start.elapsed().as_secs_f64();
    writeln!(out, "\nThis took {} seconds.", elapsed)?;
    writeln!(out, "{}", separator)?;
    Ok(())
}

/// All four reports, in their fixed order.
pub fn report_all<W: Write>(table: &TripTable, out: &mut W, separator: &str) -> AppResult<()> {
    time::report(table, out, separator)?;
    station::report(table, out, separator)?;
    duration::report(table, out, separator)?;
    user::report(table, out, separator)?;
    Ok(())
}
