//! Unified application error type.
//! All modules (config, core, cli, ui) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed before a valid answer was given")]
    InputClosed,

    // ---------------------------
    // Data source errors
    // ---------------------------
    #[error("Cannot read data source {}: {source}", path.display())]
    DataSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Data source {} is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Malformed record in {} at line {line}: {reason}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Selection errors
    // ---------------------------
    #[error("Invalid city: {0} (expected chicago, new york city or washington)")]
    InvalidCity(String),

    #[error("Invalid month: {0} (expected all or january..june)")]
    InvalidMonth(String),

    #[error("Invalid day: {0} (expected all or monday..sunday)")]
    InvalidDay(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
