use crate::errors::{AppError, AppResult};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every city file must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    START_TIME,
    END_TIME,
    START_STATION,
    END_STATION,
    USER_TYPE,
];

/// Names of the two derived columns, as shown by the row viewer.
pub const MONTH_COLUMN: &str = "month";
pub const WEEKDAY_COLUMN: &str = "day of week";

/// One trip: the raw CSV fields plus the calendar columns derived
/// from its start timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRow {
    /// Position of the row in the source file (0-based, header excluded).
    pub index: usize,
    pub fields: Vec<String>,
    /// 1..=12
    pub month: u32,
    /// Days from Monday, 0..=6
    pub weekday: u32,
}

/// In-memory trip table for one session iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripTable {
    pub source: String,
    pub headers: Vec<String>,
    pub rows: Vec<TripRow>,
}

impl TripTable {
    pub fn new(source: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            source: source.into(),
            headers,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str) -> AppResult<usize> {
        self.column(name).ok_or_else(|| AppError::MissingColumn {
            column: name.to_string(),
            file: self.source.clone(),
        })
    }

    /// Raw values of a column, in row order. Short rows yield "".
    pub fn values(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .map(move |r| r.fields.get(col).map(String::as_str).unwrap_or(""))
    }

    /// Rows `[offset, offset + size)`, clamped to the table length.
    pub fn page(&self, offset: usize, size: usize) -> &[TripRow] {
        let start = offset.min(self.rows.len());
        let end = offset.saturating_add(size).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Keep only the rows accepted by `keep`.
    pub fn retain<F>(mut self, keep: F) -> Self
    where
        F: FnMut(&TripRow) -> bool,
    {
        self.rows.retain(keep);
        self
    }
}
