//! Error types for curve-stats

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Curve core error: {0}")]
    Core(#[from] curve_core::Error),

    #[error("Curve IO error: {0}")]
    Io(#[from] curve_io::Error),

    #[error("Report serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid experiment configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
