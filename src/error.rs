//! Error handling for the winter HDD pipeline.
//!
//! Only fatal conditions live here. Unparseable cells and unresolved gaps are
//! recovered as missing data by the reader and cleaner and never surface as
//! errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HddError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("Input file not found at path: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Chart rendering failed for file: {path} - {reason}")]
    Chart { path: PathBuf, reason: String },

    #[error("Insufficient data for trend fit: {reason}")]
    InsufficientData { reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, HddError>;
