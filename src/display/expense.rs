//! Expense list formatting

use crate::models::{BudgetCategory, Expense};

use super::format::format_amount;
use super::DisplayOptions;

fn status_label(expense: &Expense) -> &'static str {
    match (expense.is_active, expense.is_paid) {
        (false, _) => "inactive",
        (true, true) => "paid",
        (true, false) => "pending",
    }
}

/// Format the expenses of a category as a numbered table
pub fn format_expense_list(category: &BudgetCategory, options: &DisplayOptions) -> String {
    if category.expenses.is_empty() {
        return "  (no expenses)\n".to_string();
    }

    let desc_width = category
        .expenses
        .iter()
        .map(|e| e.description.chars().count())
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "  {:>3}  {:<8}  {:<width$}  {:>12}  {}\n",
        "#",
        "ID",
        "Description",
        "Amount",
        "Status",
        width = desc_width
    ));

    for (i, expense) in category.expenses.iter().enumerate() {
        output.push_str(&format!(
            "  {:>3}  {:<8}  {:<width$}  {:>12}  {}\n",
            i + 1,
            expense.id.short(),
            expense.description,
            format_amount(expense.amount, &options.currency_symbol),
            status_label(expense),
            width = desc_width
        ));
    }

    output
}
