//! # lcareport - One Click LCA export classification and aggregation
//!
//! Turns a tabular life-cycle-assessment export into a normalized report:
//! entries classified into the RICS v2 building-element taxonomy, each with
//! its environmental metrics per EN 15804 life-cycle stage.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  LCA export │────▶│   Parser    │────▶│  Transform  │────▶│    Sink     │
//! │  (CSV, any  │     │  (auto-enc, │     │  (classify, │     │ (CSV tables │
//! │  encoding)  │     │  auto-delim)│     │  aggregate) │     │   / JSON)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lcareport::{pull, PullRequest, ReportRequest};
//!
//! #[tokio::main]
//! async fn main() {
//!     let request = PullRequest::Report(ReportRequest::new("export.csv"));
//!     let outcome = pull(Some(&request)).await;
//!     if let Some(report) = outcome.value {
//!         println!("{} entries", report.entries.len());
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types, one per layer
//! - [`logs`] - Console logging and recorded diagnostics
//! - [`models`] - Report, entries, metrics, indicators
//! - [`category`] - Taxonomy classification into canonical categories
//! - [`parser`] - Export reading with auto-detection
//! - [`transform`] - Grouping, aggregation, population and roll-up
//! - [`sink`] - Normalized table and JSON output
//! - [`config`] - Pull options from the CLI or environment
//! - [`adapter`] - `pull` / `push` verbs

// Core modules
pub mod error;
pub mod logs;
pub mod models;

// Classification
pub mod category;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod sink;

// Configuration
pub mod config;

// Verbs
pub mod adapter;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    AdapterError, AdapterResult, PopulateError, SinkError, SinkResult, SourceError, SourceResult,
};

// =============================================================================
// Re-exports - Diagnostics
// =============================================================================

pub use logs::{log_error, log_info, log_success, log_warning, Diagnostics, LogEntry, LogLevel, Outcome};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    EnvironmentalMetric, ExtraValue, Indicator, MetricKind, OriginalExtras, RawRow, Report,
    ReportEntry, ReportFragment, Stage, StageValue,
};

// =============================================================================
// Re-exports - Classification
// =============================================================================

pub use category::{classify, clean_code, CanonicalCategory, Taxonomy};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_delimiter, detect_encoding, parse_bytes_auto, parse_export,
    parse_file_auto, parse_metadata_auto, ExportMetadata, ExportTable,
};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::{
    group_rows, material_result, populate_report, totals_per_category, CategoryTotals,
    PopulateOptions,
};

// =============================================================================
// Re-exports - Output, config and verbs
// =============================================================================

pub use sink::{read_json, read_tables, write_json, write_tables};

pub use config::PullOptions;

pub use adapter::{pull, push, PullRequest, PushConfig, PushReceipt, ReportRequest};
