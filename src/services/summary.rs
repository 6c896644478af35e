//! Aggregation over budget snapshots
//!
//! Pure functions deriving totals and percentages from a `BudgetState` or a
//! single `BudgetCategory`. Every ratio with a zero denominator is 0.

use crate::models::{BudgetCategory, BudgetState, CategoryKey};

/// `numerator / denominator * 100`, or 0 when the denominator is not positive
fn ratio_percent(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

/// Clamp a computed percentage to `[0, 100]` for progress-bar widths
pub fn clamp_percentage(percentage: f64) -> f64 {
    if percentage.is_nan() {
        return 0.0;
    }
    percentage.clamp(0.0, 100.0)
}

/// Spending limit of a category for the given income
pub fn category_limit(income: f64, category: &BudgetCategory) -> f64 {
    income * category.percentage / 100.0
}

/// Sum of active expenses
pub fn active_total(category: &BudgetCategory) -> f64 {
    category
        .expenses
        .iter()
        .filter(|e| e.is_active)
        .map(|e| e.amount)
        .sum()
}

/// Sum of active expenses marked paid
pub fn paid_total(category: &BudgetCategory) -> f64 {
    category
        .expenses
        .iter()
        .filter(|e| e.counts_as_paid())
        .map(|e| e.amount)
        .sum()
}

/// Active spending not yet paid
pub fn pending_total(category: &BudgetCategory) -> f64 {
    active_total(category) - paid_total(category)
}

/// Active spending as a percentage of the category limit
pub fn spent_percentage(income: f64, category: &BudgetCategory) -> f64 {
    ratio_percent(active_total(category), category_limit(income, category))
}

/// Whether active spending exceeds the category limit
pub fn is_over_budget(income: f64, category: &BudgetCategory) -> bool {
    active_total(category) > category_limit(income, category)
}

/// Paid spending as a percentage of active spending
pub fn paid_percentage(category: &BudgetCategory) -> f64 {
    ratio_percent(paid_total(category), active_total(category))
}

/// Derived figures for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub key: CategoryKey,
    pub name: String,
    pub limit: f64,
    pub active_total: f64,
    pub paid_total: f64,
    pub pending_total: f64,
    pub remaining: f64,
    pub spent_percentage: f64,
    pub paid_percentage: f64,
    pub pending_percentage: f64,
    pub is_over_budget: bool,
    pub expense_count: usize,
    pub active_count: usize,
}

impl CategorySummary {
    /// Compute the summary of one category of a budget
    pub fn new(state: &BudgetState, key: CategoryKey) -> Self {
        let category = state.category(key);
        let income = state.monthly_income;

        let limit = category_limit(income, category);
        let active = active_total(category);
        let paid_pct = paid_percentage(category);

        Self {
            key,
            name: category.name.clone(),
            limit,
            active_total: active,
            paid_total: paid_total(category),
            pending_total: pending_total(category),
            remaining: limit - active,
            spent_percentage: spent_percentage(income, category),
            paid_percentage: paid_pct,
            pending_percentage: pending_share(active, paid_pct),
            is_over_budget: is_over_budget(income, category),
            expense_count: category.expenses.len(),
            active_count: category.expenses.iter().filter(|e| e.is_active).count(),
        }
    }

    /// Spent percentage clamped for progress-bar display
    pub fn bar_percentage(&self) -> f64 {
        clamp_percentage(self.spent_percentage)
    }
}

/// Pending share of active spending, 0 when nothing is active
fn pending_share(active: f64, paid_pct: f64) -> f64 {
    if active > 0.0 {
        100.0 - paid_pct
    } else {
        0.0
    }
}

/// Derived figures for the whole budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub monthly_income: f64,
    pub total_spent: f64,
    pub total_paid: f64,
    pub total_pending: f64,
    pub remaining: f64,
    pub spent_percentage: f64,
    pub paid_percentage: f64,
    pub pending_percentage: f64,
    pub is_over_budget: bool,
    pub categories: Vec<CategorySummary>,
}

impl BudgetSummary {
    /// Compute the summary of a budget snapshot
    pub fn new(state: &BudgetState) -> Self {
        let categories: Vec<_> = CategoryKey::ALL
            .iter()
            .map(|key| CategorySummary::new(state, *key))
            .collect();

        let total_spent: f64 = categories.iter().map(|c| c.active_total).sum();
        let total_paid: f64 = categories.iter().map(|c| c.paid_total).sum();
        let income = state.monthly_income;
        let paid_pct = ratio_percent(total_paid, total_spent);

        Self {
            monthly_income: income,
            total_spent,
            total_paid,
            total_pending: total_spent - total_paid,
            remaining: income - total_spent,
            spent_percentage: ratio_percent(total_spent, income),
            paid_percentage: paid_pct,
            pending_percentage: pending_share(total_spent, paid_pct),
            is_over_budget: total_spent > income,
            categories,
        }
    }

    /// Summary of one category
    pub fn category(&self, key: CategoryKey) -> &CategorySummary {
        // built in CategoryKey::ALL order
        let index = match key {
            CategoryKey::Needs => 0,
            CategoryKey::Wants => 1,
            CategoryKey::Savings => 2,
        };
        &self.categories[index]
    }

    /// Spent percentage clamped for progress-bar display
    pub fn bar_percentage(&self) -> f64 {
        clamp_percentage(self.spent_percentage)
    }

    /// Categories currently over their limit
    pub fn over_budget_categories(&self) -> impl Iterator<Item = &CategorySummary> {
        self.categories.iter().filter(|c| c.is_over_budget)
    }
}
