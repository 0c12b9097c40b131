//! Diagnostic logging.
//!
//! The interactive transcript owns stdout, so every tracing event goes to
//! stderr. The level comes from `RUST_LOG` and defaults to `warn`.

use std::io;
use tracing_subscriber::{EnvFilter, fmt};

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init: a second call (tests, embedding) keeps the first subscriber
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
