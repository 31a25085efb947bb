// crates/psgc-core/src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PsgcError>;

/// Errors produced by the PSGC matching core.
///
/// Row-level problems in the dataset (malformed codes, duplicates, unknown
/// levels) are *not* errors: the loader skips those rows and logs a warning.
/// Only a dataset with zero usable rows is fatal.
#[derive(Debug, Error)]
pub enum PsgcError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset not found: {0}")]
    NotFound(String),

    /// The source table produced no valid records at all.
    #[error("dataset contains no valid PSGC records")]
    EmptyDataset,

    /// The query string is empty once normalized (e.g. only punctuation).
    #[error("query is empty after normalization")]
    EmptyQuery,
}
