/// Error types for loading rental datasets
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load one of the rental record sets.
///
/// Any of these aborts the whole load; a record set is never returned
/// partially populated.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Source file missing or unreadable
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV, missing column, or a non-numeric count
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Date field could not be parsed
    #[error("Row {row}: failed to parse date '{value}'")]
    DateParse { row: usize, value: String },

    /// Category field holds a value outside its closed set
    #[error("Row {row}: invalid {field} '{value}'")]
    InvalidCategory {
        row: usize,
        field: &'static str,
        value: String,
    },

    /// Hour of day outside 0-23
    #[error("Row {row}: hour {value} is outside 0-23")]
    InvalidHour { row: usize, value: u32 },

    /// Stored total does not match casual + registered
    #[error("Row {row}: user_counts {stored} does not equal casual {casual} + registered {registered}")]
    CountMismatch {
        row: usize,
        casual: u32,
        registered: u32,
        stored: u32,
    },
}

/// Type alias for Results using DataLoadError
pub type Result<T> = std::result::Result<T, DataLoadError>;
