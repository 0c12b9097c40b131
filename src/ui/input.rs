use crate::errors::AppResult;
use std::io::{BufRead, Write};

/// Print `prompt`, then read one line.
///
/// Returns `None` at end of input; otherwise the line with surrounding
/// whitespace trimmed and lowercased.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> AppResult<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

/// Ask a yes/no question: only an exact (case-insensitive) "yes" counts.
pub fn ask_yes<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> AppResult<bool> {
    Ok(ask(input, out, prompt)?.is_some_and(|a| a == "yes"))
}
