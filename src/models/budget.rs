//! Budget state snapshot
//!
//! `BudgetState` is the single root value of the application. It is treated
//! as an immutable snapshot: every change produces a new value.

use serde::{Deserialize, Serialize};

use super::category::{BudgetCategory, CategoryKey};

/// The three fixed categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categories {
    pub needs: BudgetCategory,
    pub wants: BudgetCategory,
    pub savings: BudgetCategory,
}

impl Categories {
    /// Get a category by key
    pub fn get(&self, key: CategoryKey) -> &BudgetCategory {
        match key {
            CategoryKey::Needs => &self.needs,
            CategoryKey::Wants => &self.wants,
            CategoryKey::Savings => &self.savings,
        }
    }

    /// A copy with one category replaced
    pub fn with(&self, key: CategoryKey, category: BudgetCategory) -> Self {
        let mut categories = self.clone();
        match key {
            CategoryKey::Needs => categories.needs = category,
            CategoryKey::Wants => categories.wants = category,
            CategoryKey::Savings => categories.savings = category,
        }
        categories
    }

    /// Iterate categories with their keys in display order
    pub fn iter(&self) -> impl Iterator<Item = (CategoryKey, &BudgetCategory)> {
        CategoryKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

impl Default for Categories {
    fn default() -> Self {
        Self {
            needs: BudgetCategory::seed(CategoryKey::Needs),
            wants: BudgetCategory::seed(CategoryKey::Wants),
            savings: BudgetCategory::seed(CategoryKey::Savings),
        }
    }
}

/// Full budget snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetState {
    /// Monthly income to distribute
    pub monthly_income: f64,

    /// The three categories
    pub categories: Categories,
}

impl BudgetState {
    /// The seed state: no income and three empty default categories
    pub fn seed() -> Self {
        Self {
            monthly_income: 0.0,
            categories: Categories::default(),
        }
    }

    /// Get a category by key
    pub fn category(&self, key: CategoryKey) -> &BudgetCategory {
        self.categories.get(key)
    }

    /// A copy with one category replaced
    pub fn with_category(&self, key: CategoryKey, category: BudgetCategory) -> Self {
        Self {
            monthly_income: self.monthly_income,
            categories: self.categories.with(key, category),
        }
    }

    /// Number of expenses across all categories
    pub fn expense_count(&self) -> usize {
        self.categories.iter().map(|(_, c)| c.expenses.len()).sum()
    }
}

impl Default for BudgetState {
    fn default() -> Self {
        Self::seed()
    }
}
