//! Custom error types for SplitBudget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::CategoryKey;

/// The main error type for SplitBudget operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Rejected user input (empty description, non-positive amount, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Key-value store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SplitError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
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
}

/// Why an import payload was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The text is not valid JSON
    #[error("malformed JSON: {0}")]
    Malformed(String),

    /// `monthlyIncome` is absent or not a number
    #[error("monthlyIncome is missing or not a number")]
    MissingIncome,

    /// `categories` is absent or not an object
    #[error("categories is missing or not an object")]
    MissingCategories,

    /// A category merged over its seed still has wrongly-typed fields
    #[error("category '{key}' is invalid: {reason}")]
    InvalidCategory { key: CategoryKey, reason: String },
}

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for SplitBudget operations
pub type SplitResult<T> = Result<T, SplitError>;
