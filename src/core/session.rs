//! Session loop: prompt → load → view → report, until the user stops.

use super::{loader, prompt, stats, viewer};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::input::ask_yes;
use std::io::{BufRead, Write};

const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Done,
}

/// Run iterations until the restart answer is anything but "yes".
///
/// End of input while the filters are being collected also ends the
/// session normally. Returns the number of completed iterations.
pub fn run<R: BufRead, W: Write>(cfg: &Config, input: &mut R, out: &mut W) -> AppResult<usize> {
    let separator = cfg.separator();
    let data_dir = cfg.data_path();
    let mut completed = 0;
    let mut state = State::Running;

    while state == State::Running {
        let selection = match prompt::get_filters(input, out, &separator) {
            Ok(s) => s,
            Err(AppError::InputClosed(field)) => {
                tracing::info!(field, "input closed, ending session");
                break;
            }
            Err(e) => return Err(e),
        };

        let table = loader::load_data(&data_dir, &selection)?;
        viewer::display_data(input, out, &table, cfg.page_size)?;
        stats::report_all(&table, out, &separator)?;
        completed += 1;

        if !ask_yes(input, out, RESTART_PROMPT)? {
            state = State::Done;
        }
    }

    tracing::debug!(completed, "session finished");
    Ok(completed)
}
