//! Custom error types for pocket-ledger
//!
//! The ledger itself is total: derivations never fail and, under the default
//! amount policy, neither does `add_item`. Errors come from the edges:
//! configuration, reading input batches, exporting reports, and the opt-in
//! strict amount policy.

use thiserror::Error;

/// The main error type for pocket-ledger operations
#[derive(Error, Debug, Clone)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for caller-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Month number outside 1..=12
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Amount did not coerce to a number and the reject policy is active
    #[error("Amount is not numeric: {raw}")]
    NonNumericAmount { raw: String },

    /// Errors reading a transaction batch
    #[error("Import error: {0}")]
    Import(String),

    /// Errors writing a report
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a "non-numeric amount" error from the raw caller value
    pub fn non_numeric(raw: impl Into<String>) -> Self {
        Self::NonNumericAmount { raw: raw.into() }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for pocket-ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_month_error() {
        let err = LedgerError::InvalidMonth(13);
        assert_eq!(err.to_string(), "Invalid month: 13 (expected 1-12)");
    }

    #[test]
    fn test_non_numeric_error() {
        let err = LedgerError::non_numeric("\"abc\"");
        assert_eq!(err.to_string(), "Amount is not numeric: \"abc\"");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
