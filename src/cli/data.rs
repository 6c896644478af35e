//! Data CLI commands
//!
//! Export to and import from JSON backup files, and wipe the stored budget.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{SplitError, SplitResult};
use crate::export::export_file_name;
use crate::session::{BudgetSession, DataManager, StatusKind};
use crate::storage::{read_text, write_text_atomic, KeyValueStore};

/// Data subcommands
#[derive(Subcommand)]
pub enum DataCommands {
    /// Write the budget to a JSON backup file
    Export {
        /// Output file (defaults to budget-backup-<date>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the budget with the contents of a backup file
    Import {
        /// Path to the JSON backup
        file: PathBuf,
    },

    /// Delete all budget data and start over
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a data command
pub fn handle_data_command<S: KeyValueStore>(
    session: &mut BudgetSession<S>,
    settings: &Settings,
    cmd: DataCommands,
) -> SplitResult<()> {
    let mut manager = DataManager::new();

    match cmd {
        DataCommands::Export { output } => {
            let path = output.unwrap_or_else(|| default_export_path(settings));

            let Some(json) = manager.export(session, Instant::now()) else {
                return Err(SplitError::Export(manager.status().message().to_string()));
            };
            write_text_atomic(&path, &json)
                .map_err(|e| SplitError::Export(format!("{}: {}", path.display(), e)))?;

            println!("{}", manager.status().message());
            println!("  File: {}", path.display());
        }

        DataCommands::Import { file } => {
            let text = match read_text(&file) {
                Ok(Some(text)) => text,
                Ok(None) => {
                    manager.import_read_failed(Instant::now());
                    return Err(SplitError::Io(format!(
                        "{}: {}",
                        manager.status().message(),
                        file.display()
                    )));
                }
                Err(e) => {
                    manager.import_read_failed(Instant::now());
                    return Err(SplitError::Io(format!(
                        "{}: {}",
                        manager.status().message(),
                        e
                    )));
                }
            };

            if let Err(e) = manager.import(session, &text, Instant::now()) {
                eprintln!("{}", manager.status().message());
                return Err(e.into());
            }

            println!("{}", manager.status().message());
            println!(
                "  {} expenses, monthly income {}",
                session.budget().expense_count(),
                session.budget().monthly_income
            );
        }

        DataCommands::Clear { yes } => {
            manager.request_clear();

            if !yes && !confirm_clear(session.budget().expense_count())? {
                manager.cancel_clear();
                println!("Aborted.");
                return Ok(());
            }

            manager.confirm_clear(session, Instant::now());
            match manager.status().kind() {
                StatusKind::Error => {
                    return Err(SplitError::Storage(manager.status().message().to_string()))
                }
                _ => println!("{}", manager.status().message()),
            }
        }
    }

    Ok(())
}

fn default_export_path(settings: &Settings) -> PathBuf {
    let file_name = export_file_name(chrono::Local::now().date_naive());
    match &settings.export_dir {
        Some(dir) => dir.join(file_name),
        None => Path::new(".").join(file_name),
    }
}

fn confirm_clear(expense_count: usize) -> SplitResult<bool> {
    print!(
        "Delete the income and all {} expenses? This cannot be undone. (y/N): ",
        expense_count
    );
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
