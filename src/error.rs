//! Error types for the utility helpers

use thiserror::Error;

/// Result type alias for helper operations
pub type UtilsResult<T> = Result<T, UtilsError>;

/// Errors returned by the helpers. Underlying errors are passed through unchanged.
#[derive(Debug, Error)]
pub enum UtilsError {
    /// SQLite prepare/execute/query error
    #[error("SQL error: {0}")]
    Sql(#[from] rusqlite::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed seed file
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Caller-supplied pattern failed to compile
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Download failure, including non-success status codes
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Empty or inverted range passed to `rand_int`
    #[error("Invalid range: min {min} must be less than max {max}")]
    InvalidRange { min: i64, max: i64 },
}

impl UtilsError {
    /// Check if this is an underlying SQLite error
    pub fn is_sql(&self) -> bool {
        matches!(self, Self::Sql(_))
    }

    /// Check if this is a filesystem error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
