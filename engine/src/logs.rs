//! Console logging and recorded diagnostics.
//!
//! Every log line is printed to stderr (stdout is reserved for CLI output)
//! and, when it goes through a [`Diagnostics`] recorder, kept so callers can
//! inspect what happened during a `pull` or `push` without anything being
//! thrown.

use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, PopulateError};

/// Log level for display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Optional indentation level (for nested logs)
    #[serde(default)]
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Print the entry to stderr.
    pub fn emit(&self) {
        let prefix = match self.level {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        };
        let indent = "   ".repeat(self.indent as usize);
        eprintln!("{}{} {}", indent, prefix, self.message);
    }
}

pub fn log_info(msg: impl Into<String>) {
    LogEntry::info(msg).emit();
}

pub fn log_success(msg: impl Into<String>) {
    LogEntry::success(msg).emit();
}

pub fn log_warning(msg: impl Into<String>) {
    LogEntry::warning(msg).emit();
}

pub fn log_error(msg: impl Into<String>) {
    LogEntry::error(msg).emit();
}

// =============================================================================
// Diagnostics
// =============================================================================

/// A recorded problem, typed so callers can match on it.
#[derive(Debug)]
pub enum Recorded {
    Populate(PopulateError),
    Adapter(AdapterError),
}

impl std::fmt::Display for Recorded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recorded::Populate(e) => write!(f, "{}", e),
            Recorded::Adapter(e) => write!(f, "{}", e),
        }
    }
}

impl From<PopulateError> for Recorded {
    fn from(err: PopulateError) -> Self {
        Recorded::Populate(err)
    }
}

impl From<AdapterError> for Recorded {
    fn from(err: AdapterError) -> Self {
        // Keep populate errors matchable regardless of the path they took.
        match err {
            AdapterError::Populate(e) => Recorded::Populate(e),
            other => Recorded::Adapter(other),
        }
    }
}

/// Collects log lines, warnings and errors for one operation.
#[derive(Debug, Default)]
pub struct Diagnostics {
    pub entries: Vec<LogEntry>,
    pub warnings: Vec<Recorded>,
    pub errors: Vec<Recorded>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, msg: impl Into<String>) {
        self.push(LogEntry::info(msg));
    }

    pub fn success(&mut self, msg: impl Into<String>) {
        self.push(LogEntry::success(msg));
    }

    pub fn record_warning(&mut self, warning: impl Into<Recorded>) {
        let warning = warning.into();
        self.push(LogEntry::warning(warning.to_string()));
        self.warnings.push(warning);
    }

    pub fn record_error(&mut self, error: impl Into<Recorded>) {
        let error = error.into();
        self.push(LogEntry::error(error.to_string()));
        self.errors.push(error);
    }

    /// Move everything recorded by `other` into `self`.
    pub fn absorb(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether a populate error matching `pred` was recorded.
    pub fn has_populate_error(&self, pred: impl Fn(&PopulateError) -> bool) -> bool {
        self.errors.iter().any(|e| matches!(e, Recorded::Populate(p) if pred(p)))
    }

    fn push(&mut self, entry: LogEntry) {
        entry.emit();
        self.entries.push(entry);
    }
}

/// A value together with the diagnostics produced while computing it.
#[derive(Debug)]
pub struct Outcome<T> {
    pub value: T,
    pub diagnostics: Diagnostics,
}

impl<T> Outcome<T> {
    pub fn new(value: T, diagnostics: Diagnostics) -> Self {
        Self { value, diagnostics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_keeps_typed_error() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.record_error(PopulateError::MissingInput("floor area".into()));

        assert!(diagnostics.has_errors());
        assert!(diagnostics.has_populate_error(|e| matches!(e, PopulateError::MissingInput(_))));
        assert_eq!(diagnostics.entries.len(), 1);
        assert_eq!(diagnostics.entries[0].level, LogLevel::Error);
    }

    #[test]
    fn test_adapter_wrapped_populate_error_is_unwrapped() {
        let mut diagnostics = Diagnostics::new();
        let err: AdapterError = PopulateError::MissingInput("x".into()).into();
        diagnostics.record_error(err);
        assert!(diagnostics.has_populate_error(|e| matches!(e, PopulateError::MissingInput(_))));
    }

    #[test]
    fn test_log_entry_builders() {
        let entry = LogEntry::warning("nested").with_indent(2);
        assert_eq!(entry.level, LogLevel::Warning);
        assert_eq!(entry.indent, 2);
        assert_eq!(LogEntry::success("done").indent, 0);
    }

    #[test]
    fn test_absorb() {
        let mut a = Diagnostics::new();
        a.info("one");
        let mut b = Diagnostics::new();
        b.record_warning(PopulateError::MissingInput("y".into()));
        a.absorb(b);
        assert_eq!(a.entries.len(), 2);
        assert_eq!(a.warnings.len(), 1);
        assert!(!a.has_errors());
    }
}
