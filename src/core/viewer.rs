//! Row viewer: pages through the filtered table on request.

use crate::errors::AppResult;
use crate::models::table::{MONTH_COLUMN, WEEKDAY_COLUMN};
use crate::models::{TripRow, TripTable};
use crate::ui::input::ask_yes;
use crate::utils::table::{Column, Table};
use std::io::{BufRead, Write};

/// Render one page: source row index, every raw column, then the two
/// derived columns. An empty page renders as an empty string.
pub fn render_page(table: &TripTable, rows: &[TripRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut columns = vec![Column::right("")];
    columns.extend(table.headers.iter().map(|h| Column::left(h.as_str())));
    columns.push(Column::right(MONTH_COLUMN));
    columns.push(Column::right(WEEKDAY_COLUMN));

    let mut t = Table::new(columns);
    for row in rows {
        let mut cells = Vec::with_capacity(row.fields.len() + 3);
        cells.push(row.index.to_string());
        cells.extend(row.fields.iter().cloned());
        cells.push(row.month.to_string());
        cells.push(row.weekday.to_string());
        t.add_row(cells);
    }
    t.render()
}

/// Print pages of `page_size` rows while the user answers "yes".
/// Returns the number of pages shown.
pub fn display_data<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    table: &TripTable,
    page_size: usize,
) -> AppResult<usize> {
    let mut offset = 0;
    let mut pages = 0;

    let first = format!(
        "\nWould you like to view {} rows of individual trip data? Enter yes or no\n",
        page_size
    );
    let next = format!("Do you wish to see the next {} rows?: ", page_size);

    let mut wants_more = ask_yes(input, out, &first)?;
    while wants_more {
        write!(out, "{}", render_page(table, table.page(offset, page_size)))?;
        offset = offset.saturating_add(page_size);
        pages += 1;
        wants_more = ask_yes(input, out, &next)?;
    }

    Ok(pages)
}
