use std::fmt;
use std::io::{self, IsTerminal};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const FG_RED: &str = "\x1b[31m";

/// Fatal error line on stderr; colored only when stderr is a terminal.
pub fn error<T: fmt::Display>(msg: T) {
    if io::stderr().is_terminal() {
        eprintln!("{}{}Error:{} {}", FG_RED, BOLD, RESET, msg);
    } else {
        eprintln!("Error: {}", msg);
    }
}
