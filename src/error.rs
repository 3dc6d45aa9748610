//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the ledger core using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for ledger operations
#[derive(Error, Debug)]
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

    /// Bad user input (empty fields, unparseable or negative amounts)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Adding the expense would push spending past the budget
    #[error("Budget of {budget} would be exceeded. Remaining budget: {remaining}")]
    BudgetExceeded { budget: Money, remaining: Money },

    /// Positional access with a stale or invalid index
    #[error("Index {index} is out of range for a ledger of {len} expense(s)")]
    Index { index: usize, len: usize },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Stored data could not be decoded. Never repaired automatically.
    #[error("Stored data under '{key}' is corrupt: {reason}")]
    CorruptData { key: String, reason: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a corrupt-data error for a store key
    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::CorruptData {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a budget rejection
    pub fn is_budget_exceeded(&self) -> bool {
        matches!(self, Self::BudgetExceeded { .. })
    }

    /// Check if the stored data is unreadable
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptData { .. })
    }
}

// Implement From traits for common error types

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

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for ledger operations
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
    fn test_not_found_error() {
        let err = LedgerError::expense_not_found("exp-1234abcd");
        assert_eq!(err.to_string(), "Expense not found: exp-1234abcd");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_budget_exceeded_error() {
        let err = LedgerError::BudgetExceeded {
            budget: Money::from_cents(10000),
            remaining: Money::from_cents(2000),
        };
        assert_eq!(
            err.to_string(),
            "Budget of $100.00 would be exceeded. Remaining budget: $20.00"
        );
        assert!(err.is_budget_exceeded());
    }

    #[test]
    fn test_index_error() {
        let err = LedgerError::Index { index: 3, len: 2 };
        assert_eq!(
            err.to_string(),
            "Index 3 is out of range for a ledger of 2 expense(s)"
        );
    }

    #[test]
    fn test_corrupt_error() {
        let err = LedgerError::corrupt("expenses", "expected value at line 1 column 1");
        assert!(err.is_corrupt());
        assert!(err.to_string().contains("'expenses'"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
