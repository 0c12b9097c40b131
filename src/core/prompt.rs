//! Filter prompt: asks for city, month and day until each one is valid.

use crate::errors::{AppError, AppResult};
use crate::models::{City, DayFilter, FilterSelection, MonthFilter};
use crate::ui::input::ask;
use std::io::{BufRead, Write};

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

/// Re-prompt until `parse` accepts the answer.
/// `label` names the field in the rejection message.
fn ask_until<R, W, T, F>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    label: &'static str,
    parse: F,
) -> AppResult<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        let Some(answer) = ask(input, out, prompt)? else {
            return Err(AppError::InputClosed(label));
        };
        match parse(&answer) {
            Some(v) => return Ok(v),
            None => writeln!(out, "{} {} not available in data set", label, answer)?,
        }
    }
}

/// Collect a validated [`FilterSelection`].
///
/// Invalid values only cause a re-prompt; the sole error besides I/O
/// failures is [`AppError::InputClosed`] when stdin runs dry.
pub fn get_filters<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    separator: &str,
) -> AppResult<FilterSelection> {
    writeln!(out, "{}", GREETING)?;

    let city = ask_until(
        input,
        out,
        "Which city would you like to select? ",
        "City",
        City::from_name,
    )?;
    let month = ask_until(
        input,
        out,
        "Which month would you like to select? ",
        "Month",
        MonthFilter::from_input,
    )?;
    let day = ask_until(
        input,
        out,
        "Which day would you like to select? ",
        "Day",
        DayFilter::from_input,
    )?;

    writeln!(out, "{}", separator)?;

    tracing::info!(%city, %month, %day, "filters selected");
    Ok(FilterSelection { city, month, day })
}
