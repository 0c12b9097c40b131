use super::city::City;
use serde::Serialize;
use std::fmt;

/// Months covered by the data sets. Only January to June can be selected.
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Weekday labels, Monday first (index = days from Monday).
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const ALL: &str = "all";

/// Month axis of a selection. `Only(m)` holds the calendar month (1..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MonthFilter {
    All,
    Only(u32),
}

impl MonthFilter {
    pub fn from_input(s: &str) -> Option<Self> {
        if s == ALL {
            return Some(MonthFilter::All);
        }
        MONTHS
            .iter()
            .position(|m| *m == s)
            .map(|i| MonthFilter::Only(i as u32 + 1))
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => *m == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str(ALL),
            MonthFilter::Only(m) => f.write_str(MONTHS[(*m - 1) as usize]),
        }
    }
}

/// Weekday axis of a selection. `Only(d)` holds days from Monday (0..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayFilter {
    All,
    Only(u32),
}

impl DayFilter {
    pub fn from_input(s: &str) -> Option<Self> {
        if s == ALL {
            return Some(DayFilter::All);
        }
        DAY_NAMES
            .iter()
            .position(|d| d.to_lowercase() == s)
            .map(|i| DayFilter::Only(i as u32))
    }

    pub fn matches(&self, weekday: u32) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => *d == weekday,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str(ALL),
            DayFilter::Only(d) => f.write_str(DAY_NAMES[*d as usize]),
        }
    }
}

/// Validated (city, month, day) triple for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

/// Label for a weekday index (0 = Monday).
pub fn day_name(weekday: u32) -> &'static str {
    DAY_NAMES[weekday as usize % 7]
}
