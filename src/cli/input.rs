//! Validation of command-line input
//!
//! The mutation functions accept anything; everything a user types is
//! checked here before it reaches them.

use crate::error::{SplitError, SplitResult};
use crate::models::{BudgetCategory, ExpenseId};

/// Parse a money amount, rejecting NaN and infinities
pub fn parse_amount(input: &str) -> SplitResult<f64> {
    let trimmed = input.trim().trim_start_matches('$');
    let value: f64 = trimmed
        .parse()
        .map_err(|_| SplitError::Validation(format!("'{}' is not a valid amount", input)))?;

    if !value.is_finite() {
        return Err(SplitError::Validation(format!(
            "'{}' is not a finite amount",
            input
        )));
    }
    Ok(value)
}

/// Parse a monthly income: finite and not negative
pub fn parse_income(input: &str) -> SplitResult<f64> {
    let value = parse_amount(input)?;
    if value < 0.0 {
        return Err(SplitError::Validation(
            "Monthly income cannot be negative".into(),
        ));
    }
    Ok(value)
}

/// A validated description/amount pair ready for `add` or `edit`
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseInput {
    pub description: String,
    pub amount: f64,
}

impl ExpenseInput {
    pub fn new(description: &str, amount: &str) -> SplitResult<Self> {
        let description = description.trim();
        if description.is_empty() {
            return Err(SplitError::Validation(
                "Expense description cannot be empty".into(),
            ));
        }

        let amount = parse_amount(amount)?;
        if amount <= 0.0 {
            return Err(SplitError::Validation(
                "Expense amount must be greater than zero".into(),
            ));
        }

        Ok(Self {
            description: description.to_string(),
            amount,
        })
    }
}

/// Find an expense by full id or unique id prefix
pub fn resolve_expense_id(category: &BudgetCategory, needle: &str) -> SplitResult<ExpenseId> {
    let needle = needle.trim();

    if let Some(expense) = category.expenses.iter().find(|e| e.id.as_str() == needle) {
        return Ok(expense.id.clone());
    }

    let matches: Vec<&ExpenseId> = category
        .expenses
        .iter()
        .map(|e| &e.id)
        .filter(|id| id.starts_with(needle))
        .collect();

    match matches.as_slice() {
        [id] => Ok((*id).clone()),
        [] => Err(SplitError::expense_not_found(needle)),
        _ => Err(SplitError::Validation(format!(
            "'{}' matches {} expenses; use a longer id",
            needle,
            matches.len()
        ))),
    }
}

/// Convert a 1-based list position into an index
pub fn parse_position(position: usize, len: usize) -> SplitResult<usize> {
    if position == 0 || position > len {
        return Err(SplitError::Validation(format!(
            "Position {} is out of range (1-{})",
            position, len
        )));
    }
    Ok(position - 1)
}
