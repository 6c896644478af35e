//! Display formatting for terminal output
//!
//! Plain-text rendering of budget summaries and expense lists.

pub mod expense;
pub mod format;
pub mod summary;

pub use expense::format_expense_list;
pub use format::{format_amount, format_percentage, progress_bar};
pub use summary::{format_budget_summary, format_category_card, format_overview};

use crate::config::settings::Settings;

/// Rendering preferences taken from the settings
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub bar_width: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for DisplayOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            bar_width: settings.progress_bar_width,
        }
    }
}
