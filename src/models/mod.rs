//! Core data models for SplitBudget
//!
//! This module contains the data structures that represent the budget: the
//! root snapshot, its three fixed categories, and their expenses.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;

pub use budget::{BudgetState, Categories};
pub use category::{BudgetCategory, CategoryKey, ParseCategoryKeyError};
pub use expense::Expense;
pub use ids::ExpenseId;
