//! Error types for the data-loader crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - Enum variants for different error cases
//! - Error messages with context
//! - `#[from]` conversions so `?` works on io and csv errors

use thiserror::Error;

/// Errors that can occur while loading or saving a listing file
///
/// The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` based on our `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Low-level CSV error without positional information
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A row in the input couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// The input has no header row, so there is no schema to work with
    #[error("No header row found in {path}")]
    MissingHeader { path: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
