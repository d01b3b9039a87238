//! Unified application error type.
//! Every stage of the pipeline (loader, normalizer, analyzer, cli) returns
//! AppError so that failures reach `main` unchanged.

use crate::models::category::Category;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Archive / tabular structure
    // ---------------------------
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp at row {row}: '{value}'")]
    InvalidTimestamp { row: usize, value: String },

    #[error("Missing value for '{column}' at row {row}")]
    MissingValue { row: usize, column: String },

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    // ---------------------------
    // Category dispatch
    // ---------------------------
    #[error("No '{0}' file found in archive")]
    MissingCategory(Category),

    #[error("File name '{0}' matches more than one category")]
    AmbiguousCategory(String),

    #[error("More than one '{0}' file found in archive")]
    DuplicateCategory(Category),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
