use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the bikeshare explorer.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A CSV file could not be opened or read from disk.
    #[error("Failed to read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV row could not be parsed.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A start-time string did not match any recognised format.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),

    /// A city name is not one of the three supported cities.
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// A required column is absent from the source file.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// The configured data directory does not exist.
    #[error("Data directory not found: {}", .0.display())]
    DataDirNotFound(PathBuf),

    /// The month/day filters matched no trip records.
    #[error("No trip records match the selected filters")]
    NoMatchingRecords,

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the bikeshare crates.
pub type Result<T> = std::result::Result<T, BikeshareError>;
