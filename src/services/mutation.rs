//! Budget state transitions
//!
//! Every operation takes the current snapshot by reference and returns a new
//! one. Operations never fail: an unknown expense id leaves the budget as it
//! was. Input validation belongs to the caller.

use std::collections::HashMap;

use crate::models::{BudgetState, CategoryKey, Expense, ExpenseId};

/// Replace the monthly income
pub fn set_income(state: &BudgetState, value: f64) -> BudgetState {
    BudgetState {
        monthly_income: value,
        categories: state.categories.clone(),
    }
}

/// Append a new active, unpaid expense to a category
pub fn add_expense(
    state: &BudgetState,
    key: CategoryKey,
    description: impl Into<String>,
    amount: f64,
) -> BudgetState {
    let category = state.category(key);
    let mut expenses = category.expenses.clone();
    expenses.push(Expense::new(description, amount));
    state.with_category(key, category.with_expenses(expenses))
}

/// Apply `f` to the expense with `id`; unchanged copy if there is none
fn map_expense(
    state: &BudgetState,
    key: CategoryKey,
    id: &ExpenseId,
    f: impl FnOnce(&Expense) -> Expense,
) -> BudgetState {
    let category = state.category(key);
    let Some(index) = category.position(id) else {
        return state.clone();
    };

    let mut expenses = category.expenses.clone();
    expenses[index] = f(&category.expenses[index]);
    state.with_category(key, category.with_expenses(expenses))
}

/// Replace the description and amount of an expense
pub fn edit_expense(
    state: &BudgetState,
    key: CategoryKey,
    id: &ExpenseId,
    description: impl Into<String>,
    amount: f64,
) -> BudgetState {
    map_expense(state, key, id, |expense| Expense {
        description: description.into(),
        amount,
        ..expense.clone()
    })
}

/// Flip whether an expense counts toward totals
pub fn toggle_expense_active(state: &BudgetState, key: CategoryKey, id: &ExpenseId) -> BudgetState {
    map_expense(state, key, id, |expense| Expense {
        is_active: !expense.is_active,
        ..expense.clone()
    })
}

/// Flip the paid flag, whether or not the expense is active
pub fn toggle_expense_paid(state: &BudgetState, key: CategoryKey, id: &ExpenseId) -> BudgetState {
    map_expense(state, key, id, |expense| Expense {
        is_paid: !expense.is_paid,
        ..expense.clone()
    })
}

/// Remove the first expense with `id`
pub fn delete_expense(state: &BudgetState, key: CategoryKey, id: &ExpenseId) -> BudgetState {
    let category = state.category(key);
    let Some(index) = category.position(id) else {
        return state.clone();
    };

    let mut expenses = category.expenses.clone();
    expenses.remove(index);
    state.with_category(key, category.with_expenses(expenses))
}

/// Whether `candidate` holds exactly the ids of `current`, in any order
pub fn is_permutation(current: &[Expense], candidate: &[Expense]) -> bool {
    if current.len() != candidate.len() {
        return false;
    }

    let mut counts: HashMap<&ExpenseId, isize> = HashMap::new();
    for expense in current {
        *counts.entry(&expense.id).or_default() += 1;
    }
    for expense in candidate {
        *counts.entry(&expense.id).or_default() -= 1;
    }
    counts.values().all(|&n| n == 0)
}

/// Replace a category's expense list with `new_order`, verbatim
///
/// `new_order` must be a permutation of the category's current expenses.
/// This is asserted in debug builds only; release builds store whatever
/// sequence they are given.
pub fn reorder_expenses(
    state: &BudgetState,
    key: CategoryKey,
    new_order: Vec<Expense>,
) -> BudgetState {
    let category = state.category(key);
    debug_assert!(
        is_permutation(&category.expenses, &new_order),
        "reorder of '{}' is not a permutation of its expenses",
        key
    );
    state.with_category(key, category.with_expenses(new_order))
}

/// Move the expense at `from` to position `to`, shifting the ones between
///
/// Out-of-range positions leave the budget unchanged.
pub fn move_expense(state: &BudgetState, key: CategoryKey, from: usize, to: usize) -> BudgetState {
    let expenses = &state.category(key).expenses;
    if from >= expenses.len() || to >= expenses.len() || from == to {
        return state.clone();
    }

    let mut reordered = expenses.clone();
    let moved = reordered.remove(from);
    reordered.insert(to, moved);
    reorder_expenses(state, key, reordered)
}
