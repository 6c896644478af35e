//! Expense CLI commands
//!
//! Implements CLI commands for adding, editing and ordering the expenses
//! of a category.

use clap::Subcommand;

use crate::display::{format_amount, format_category_card, format_expense_list, DisplayOptions};
use crate::error::{SplitError, SplitResult};
use crate::models::{CategoryKey, Expense};
use crate::services::{mutation, CategorySummary};
use crate::session::BudgetSession;
use crate::storage::KeyValueStore;

use super::input::{parse_position, resolve_expense_id, ExpenseInput};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add an expense to a category
    Add {
        /// Category (needs, wants, savings)
        category: CategoryKey,
        /// What the money is for
        description: String,
        /// Amount (e.g., "25" or "25.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Change an expense's description and amount
    Edit {
        /// Category (needs, wants, savings)
        category: CategoryKey,
        /// Expense ID or unique prefix
        id: String,
        /// New description
        description: String,
        /// New amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Include or exclude an expense from the totals
    Toggle {
        /// Category (needs, wants, savings)
        category: CategoryKey,
        /// Expense ID or unique prefix
        id: String,
    },

    /// Mark an expense as paid or pending
    Pay {
        /// Category (needs, wants, savings)
        category: CategoryKey,
        /// Expense ID or unique prefix
        id: String,
    },

    /// Delete an expense
    Delete {
        /// Category (needs, wants, savings)
        category: CategoryKey,
        /// Expense ID or unique prefix
        id: String,
    },

    /// Move an expense to another position (1-based)
    Move {
        /// Category (needs, wants, savings)
        category: CategoryKey,
        /// Current position
        from: usize,
        /// New position
        to: usize,
    },

    /// Put every expense of a category in the given order
    Reorder {
        /// Category (needs, wants, savings)
        category: CategoryKey,
        /// All expense IDs (or unique prefixes) in the new order
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// List expenses
    #[command(alias = "ls")]
    List {
        /// Only this category
        category: Option<CategoryKey>,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: KeyValueStore>(
    session: &mut BudgetSession<S>,
    options: &DisplayOptions,
    cmd: ExpenseCommands,
) -> SplitResult<()> {
    let money = |amount: f64| format_amount(amount, &options.currency_symbol);

    match cmd {
        ExpenseCommands::Add {
            category,
            description,
            amount,
        } => {
            let input = ExpenseInput::new(&description, &amount)?;
            session.update_budget(|budget| {
                mutation::add_expense(budget, category, input.description.clone(), input.amount)
            });

            let added = session.budget().category(category).expenses.last();
            if let Some(expense) = added {
                println!(
                    "Added '{}' ({}) to {} [{}]",
                    expense.description,
                    money(expense.amount),
                    session.budget().category(category).name,
                    expense.id.short()
                );
            }
        }

        ExpenseCommands::Edit {
            category,
            id,
            description,
            amount,
        } => {
            let id = resolve_expense_id(session.budget().category(category), &id)?;
            let input = ExpenseInput::new(&description, &amount)?;
            session.update_budget(|budget| {
                mutation::edit_expense(budget, category, &id, input.description.clone(), input.amount)
            });
            println!(
                "Updated expense {}: '{}' ({})",
                id.short(),
                input.description,
                money(input.amount)
            );
        }

        ExpenseCommands::Toggle { category, id } => {
            let id = resolve_expense_id(session.budget().category(category), &id)?;
            session.update_budget(|budget| mutation::toggle_expense_active(budget, category, &id));

            if let Some(expense) = session.budget().category(category).expense(&id) {
                let state = if expense.is_active { "included in" } else { "excluded from" };
                println!("'{}' is now {} the totals", expense.description, state);
            }
        }

        ExpenseCommands::Pay { category, id } => {
            let id = resolve_expense_id(session.budget().category(category), &id)?;
            session.update_budget(|budget| mutation::toggle_expense_paid(budget, category, &id));

            if let Some(expense) = session.budget().category(category).expense(&id) {
                let state = if expense.is_paid { "paid" } else { "pending" };
                println!("'{}' marked as {}", expense.description, state);
            }
        }

        ExpenseCommands::Delete { category, id } => {
            let id = resolve_expense_id(session.budget().category(category), &id)?;
            let description = session
                .budget()
                .category(category)
                .expense(&id)
                .map(|e| e.description.clone())
                .unwrap_or_default();

            session.update_budget(|budget| mutation::delete_expense(budget, category, &id));
            println!("Deleted '{}'", description);
        }

        ExpenseCommands::Move { category, from, to } => {
            let len = session.budget().category(category).expenses.len();
            let from = parse_position(from, len)?;
            let to = parse_position(to, len)?;

            session.update_budget(|budget| mutation::move_expense(budget, category, from, to));
            print!(
                "{}",
                format_expense_list(session.budget().category(category), options)
            );
        }

        ExpenseCommands::Reorder { category, ids } => {
            let current = session.budget().category(category);
            let mut new_order: Vec<Expense> = Vec::with_capacity(ids.len());
            for needle in &ids {
                let id = resolve_expense_id(current, needle)?;
                if let Some(expense) = current.expense(&id) {
                    new_order.push(expense.clone());
                }
            }

            if !mutation::is_permutation(&current.expenses, &new_order) {
                return Err(SplitError::Validation(format!(
                    "Reorder must list each of the {} expenses in {} exactly once",
                    current.expenses.len(),
                    category
                )));
            }

            session.update_budget(|budget| mutation::reorder_expenses(budget, category, new_order));
            print!(
                "{}",
                format_expense_list(session.budget().category(category), options)
            );
        }

        ExpenseCommands::List { category } => {
            let keys = match category {
                Some(key) => vec![key],
                None => CategoryKey::ALL.to_vec(),
            };

            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                let summary = CategorySummary::new(session.budget(), key);
                print!("{}", format_category_card(&summary, options));
                print!(
                    "{}",
                    format_expense_list(session.budget().category(key), options)
                );
            }
        }
    }

    Ok(())
}
