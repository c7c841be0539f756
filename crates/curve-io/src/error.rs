//! Error types for curve-io

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Curve core error: {0}")]
    Core(#[from] curve_core::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("Row {row}, column '{column}': cannot parse '{value}'")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
