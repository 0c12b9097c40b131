use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `config` subcommand; `path` is the file the configuration
/// was loaded from (it may not exist yet).
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    let Commands::Config { print_config } = cmd;

    println!("Configuration file: {}", path.display());

    if *print_config {
        println!("Current configuration:\n");
        print!("{}", serde_yaml::to_string(cfg)?);
    }

    Ok(())
}
