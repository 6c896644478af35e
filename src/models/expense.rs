//! Expense model
//!
//! An expense is a planned or actual outflow inside one category. Inactive
//! expenses are kept but excluded from totals; the paid flag splits active
//! spending into paid and pending.

use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;

/// A single expense within a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Stable identifier, never changes after creation
    pub id: ExpenseId,

    /// Free-form description
    pub description: String,

    /// Amount (positive by convention)
    pub amount: f64,

    /// Whether the expense counts toward spending totals
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Whether the expense has been settled
    #[serde(default)]
    pub is_paid: bool,
}

fn default_active() -> bool {
    true
}

impl Expense {
    /// Create a new active, unpaid expense with a fresh identifier
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            is_active: true,
            is_paid: false,
        }
    }

    /// Whether this expense contributes to the paid total
    pub fn counts_as_paid(&self) -> bool {
        self.is_active && self.is_paid
    }
}
