//! Service layer for SplitBudget
//!
//! Pure logic over budget snapshots: state transitions and the derived
//! totals shown to the user.

pub mod mutation;
pub mod summary;

pub use mutation::{
    add_expense, delete_expense, edit_expense, is_permutation, move_expense, reorder_expenses,
    set_income, toggle_expense_active, toggle_expense_paid,
};
pub use summary::{BudgetSummary, CategorySummary};
