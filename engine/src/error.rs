//! Error types for the LCA report engine.
//!
//! One error type per layer:
//!
//! - [`SourceError`] - reading the tabular export
//! - [`PopulateError`] - building report entries for an indicator
//! - [`SinkError`] - writing or reading back the normalized tables
//! - [`AdapterError`] - top-level `pull` / `push` failures
//!
//! Conversions are automatic via `From` implementations, so `?` works across
//! layer boundaries. None of these escape the `pull` / `push` verbs: they are
//! recorded into [`crate::logs::Diagnostics`] instead.

use thiserror::Error;

// =============================================================================
// Source Errors
// =============================================================================

/// Errors while reading an LCA export.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to decode the file content.
    #[error("Failed to decode content: {0}")]
    EncodingError(String),

    /// Invalid CSV format.
    #[error("Invalid CSV format: {0}")]
    ParseError(String),

    /// Empty file.
    #[error("Export file is empty")]
    EmptyFile,

    /// No metadata block found.
    #[error("Failed to pull the metadata from the report. Make sure that the file is in the correct location.")]
    NoMetadata,

    /// No headers found.
    #[error("Failed to pull the column headers from the report. Make sure you provide the correct file.")]
    NoHeaders,

    /// No content rows found.
    #[error("Failed to pull the content from the report. Make sure you provide the correct file.")]
    NoContent,
}

impl From<csv::Error> for SourceError {
    fn from(err: csv::Error) -> Self {
        SourceError::ParseError(err.to_string())
    }
}

// =============================================================================
// Populate Errors
// =============================================================================

/// Recoverable problems found while populating a report.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PopulateError {
    /// Required metadata, column or fragment is absent.
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// Indicator value not recognized.
    #[error("Indicator '{value}' is not supported. Valid indicators are: {}", valid.join(", "))]
    UnsupportedIndicator { value: String, valid: Vec<String> },

    /// More than one row for the same section within one entry group.
    #[error("Resource '{resource}' has {count} rows for section '{section}'; rows were paired by order of appearance")]
    DuplicateSection {
        resource: String,
        section: String,
        count: usize,
    },
}

// =============================================================================
// Sink Errors
// =============================================================================

/// Errors while writing or reading the normalized tables.
#[derive(Debug, Error)]
pub enum SinkError {
    /// IO error.
    #[error("Sink IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV error.
    #[error("Sink CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// JSON error.
    #[error("Sink JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Output format not supported.
    #[error("{0}")]
    UnsupportedFormat(String),

    /// A table expected in the output directory is missing.
    #[error("Missing table: {0}")]
    MissingTable(String),
}

// =============================================================================
// Adapter Errors (top-level)
// =============================================================================

/// Top-level `pull` / `push` errors.
///
/// Wraps all lower-level errors and adds request-level variants.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Export reading error.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Report population error.
    #[error("Populate error: {0}")]
    Populate(#[from] PopulateError),

    /// Output error.
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),

    /// Missing or malformed request / config.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;
