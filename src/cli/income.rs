//! Income CLI commands
//!
//! Implements CLI commands for the monthly income.

use clap::Subcommand;

use crate::display::{format_amount, DisplayOptions};
use crate::error::SplitResult;
use crate::models::CategoryKey;
use crate::services::mutation;
use crate::services::summary::category_limit;
use crate::session::BudgetSession;
use crate::storage::KeyValueStore;

use super::input::parse_income;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the monthly income
    Set {
        /// Income amount (e.g., "3000" or "3000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the monthly income and each category's share of it
    Show,
}

/// Handle an income command
pub fn handle_income_command<S: KeyValueStore>(
    session: &mut BudgetSession<S>,
    options: &DisplayOptions,
    cmd: IncomeCommands,
) -> SplitResult<()> {
    match cmd {
        IncomeCommands::Set { amount } => {
            let income = parse_income(&amount)?;
            session.update_budget(|budget| mutation::set_income(budget, income));
            println!(
                "Monthly income set to {}",
                format_amount(income, &options.currency_symbol)
            );
        }

        IncomeCommands::Show => {
            let budget = session.budget();
            println!(
                "Monthly income: {}",
                format_amount(budget.monthly_income, &options.currency_symbol)
            );
            println!();

            for key in CategoryKey::ALL {
                let category = budget.category(key);
                println!(
                    "  {:<24} {:>5.1}%  {:>12}",
                    format!("{} [{}]", category.name, key),
                    category.percentage,
                    format_amount(
                        category_limit(budget.monthly_income, category),
                        &options.currency_symbol
                    )
                );
            }
        }
    }

    Ok(())
}
