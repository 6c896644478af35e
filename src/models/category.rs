//! Budget category model
//!
//! A budget always has exactly three categories, addressed by a fixed key.
//! Each one receives a percentage of the monthly income and holds an ordered
//! list of expenses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::expense::Expense;
use super::ids::ExpenseId;

/// Fixed key of one of the three budget categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Needs,
    Wants,
    Savings,
}

impl CategoryKey {
    /// All keys in display order
    pub const ALL: [CategoryKey; 3] = [Self::Needs, Self::Wants, Self::Savings];

    /// Key as it appears in stored JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Needs => "needs",
            Self::Wants => "wants",
            Self::Savings => "savings",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the category keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryKeyError(String);

impl fmt::Display for ParseCategoryKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown category '{}' (expected needs, wants or savings)",
            self.0
        )
    }
}

impl std::error::Error for ParseCategoryKeyError {}

impl FromStr for CategoryKey {
    type Err = ParseCategoryKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "needs" => Ok(Self::Needs),
            "wants" => Ok(Self::Wants),
            "savings" => Ok(Self::Savings),
            other => Err(ParseCategoryKeyError(other.to_string())),
        }
    }
}

/// One income bucket with its percentage target and expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    /// Display name
    pub name: String,

    /// Share of the monthly income, 0-100
    pub percentage: f64,

    /// Expenses in display order
    pub expenses: Vec<Expense>,

    /// Accent color (CSS hex)
    pub color: String,

    /// Icon name
    pub icon: String,
}

impl BudgetCategory {
    /// The default category for a key
    pub fn seed(key: CategoryKey) -> Self {
        let (name, percentage, color, icon) = match key {
            CategoryKey::Needs => ("Necesidades", 50.0, "#10B981", "home"),
            CategoryKey::Wants => ("Deudas/Otros gastos", 30.0, "#3B82F6", "shopping-bag"),
            CategoryKey::Savings => ("Ahorros", 20.0, "#F59E0B", "piggy-bank"),
        };

        Self {
            name: name.to_string(),
            percentage,
            expenses: Vec::new(),
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }

    /// Find an expense by ID
    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    /// Position of an expense in the list
    pub fn position(&self, id: &ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| &e.id == id)
    }

    /// Replace the expense list, keeping everything else
    pub fn with_expenses(&self, expenses: Vec<Expense>) -> Self {
        Self {
            expenses,
            ..self.clone()
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
