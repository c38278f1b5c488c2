use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the fusion crates.
#[derive(Error, Debug)]
pub enum FusionError {
    /// The raw source path contained a parent-directory traversal marker.
    /// Raised before any path resolution or file access is attempted.
    #[error("Path traversal detected in {0}")]
    SecurityViolation(String),

    /// The resolved path does not reference an existing regular file.
    #[error("CSV file not found: {0}")]
    NotFound(PathBuf),

    /// An aggregate was requested over zero valid numeric values.
    #[error("No valid numeric values found in {0}")]
    EmptyData(PathBuf),

    /// Division by zero in the arithmetic helpers.
    #[error("Cannot divide by zero")]
    DivideByZero,

    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed at the header or record level.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the fusion crates.
pub type Result<T> = std::result::Result<T, FusionError>;
