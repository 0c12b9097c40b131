use crate::config::Config;
use crate::core::session;
use crate::errors::AppResult;
use std::io;

/// Interactive session on the process stdin/stdout.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    session::run(cfg, &mut input, &mut out)?;
    Ok(())
}
