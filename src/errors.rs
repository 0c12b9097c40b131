//! Unified application error type.
//! All modules (config, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Standard input reached EOF while a value was still expected.
    #[error("Input closed while waiting for {0}")]
    InputClosed(&'static str),

    // ---------------------------
    // Data set errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{column}' in {file}")]
    MissingColumn { column: String, file: String },

    #[error("Invalid timestamp in column '{column}': {value}")]
    InvalidTimestamp { column: String, value: String },

    #[error("Invalid number in column '{column}': {value}")]
    InvalidNumber { column: String, value: String },

    #[error("Duration overflow in row {0}")]
    DurationOverflow(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
