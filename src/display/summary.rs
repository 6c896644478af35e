//! Budget overview formatting
//!
//! Whole-budget totals followed by one card per category. Bars are clamped
//! at 100%, the percentage text is not, so overspending stays visible.

use crate::models::BudgetState;
use crate::services::{BudgetSummary, CategorySummary};

use super::expense::format_expense_list;
use super::format::{format_amount, format_percentage, progress_bar};
use super::DisplayOptions;

/// Format the whole-budget block
pub fn format_budget_summary(summary: &BudgetSummary, options: &DisplayOptions) -> String {
    let money = |amount: f64| format_amount(amount, &options.currency_symbol);
    let mut output = String::new();

    output.push_str(&format!("Monthly income: {}\n", money(summary.monthly_income)));
    output.push_str(&format!("Total spent:    {}\n", money(summary.total_spent)));
    output.push_str(&format!("  Paid:         {}\n", money(summary.total_paid)));
    output.push_str(&format!("  Pending:      {}\n", money(summary.total_pending)));

    if summary.remaining < 0.0 {
        output.push_str(&format!("Over budget:    {}\n", money(-summary.remaining)));
    } else {
        output.push_str(&format!("Available:      {}\n", money(summary.remaining)));
    }

    output.push_str(&format!(
        "Budget used:    {} {}\n",
        progress_bar(summary.spent_percentage, options.bar_width),
        format_percentage(summary.spent_percentage)
    ));

    if summary.total_spent > 0.0 {
        output.push_str(&format!(
            "Still to pay:   {} {}\n",
            progress_bar(summary.pending_percentage, options.bar_width),
            format_percentage(summary.pending_percentage)
        ));
    }

    if summary.is_over_budget {
        output.push_str("\n⚠ Spending exceeds your monthly income.\n");
    }

    output
}

/// Format one category card (header, limit, bar)
pub fn format_category_card(summary: &CategorySummary, options: &DisplayOptions) -> String {
    let money = |amount: f64| format_amount(amount, &options.currency_symbol);
    let marker = if summary.is_over_budget { " ⚠" } else { "" };

    let mut output = format!("{} [{}]{}\n", summary.name, summary.key, marker);
    output.push_str(&format!(
        "  Spent {} of {} ({})\n",
        money(summary.active_total),
        money(summary.limit),
        format_percentage(summary.spent_percentage)
    ));
    output.push_str(&format!(
        "  {}\n",
        progress_bar(summary.spent_percentage, options.bar_width)
    ));

    if summary.active_total > 0.0 {
        output.push_str(&format!(
            "  Paid {} / pending {} ({} still to pay)\n",
            money(summary.paid_total),
            money(summary.pending_total),
            format_percentage(summary.pending_percentage)
        ));
    }

    output
}

/// Format the full overview: totals, then each category with its expenses
pub fn format_overview(state: &BudgetState, options: &DisplayOptions) -> String {
    if state.monthly_income <= 0.0 {
        return "Set your monthly income to start planning.\n\n\
                Run 'splitbudget income set <amount>'."
            .to_string();
    }

    let summary = BudgetSummary::new(state);
    let mut output = format_budget_summary(&summary, options);

    for category in &summary.categories {
        output.push('\n');
        output.push_str(&format_category_card(category, options));
        output.push_str(&format_expense_list(state.category(category.key), options));
    }

    output
}
