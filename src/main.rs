use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use splitbudget::cli::{
    handle_data_command, handle_expense_command, handle_income_command, DataCommands,
    ExpenseCommands, IncomeCommands,
};
use splitbudget::config::{paths::SplitPaths, settings::Settings};
use splitbudget::display::{format_overview, DisplayOptions};
use splitbudget::logging::init_tracing;
use splitbudget::session::BudgetSession;
use splitbudget::storage::open_file_gateway;

#[derive(Parser)]
#[command(
    name = "splitbudget",
    version,
    about = "Terminal 50/30/20 budgeting",
    long_about = "SplitBudget divides your monthly income into needs (50%), \
                  wants (30%) and savings (20%), and tracks the expenses you \
                  plan against each share."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show the budget overview
    #[command(alias = "status")]
    Summary,

    /// Export, import or clear budget data
    #[command(subcommand)]
    Data(DataCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SplitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }
    init_tracing(&settings.log_level);
    debug!(base_dir = %paths.base_dir().display(), "starting");

    let options = DisplayOptions::from(&settings);
    let mut session = BudgetSession::open(open_file_gateway(&paths)?);

    match cli.command {
        Some(Commands::Income(cmd)) => handle_income_command(&mut session, &options, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut session, &options, cmd)?,
        Some(Commands::Summary) => {
            println!("{}", format_overview(session.budget(), &options).trim_end());
        }
        Some(Commands::Data(cmd)) => handle_data_command(&mut session, &settings, cmd)?,
        Some(Commands::Config) => {
            println!("SplitBudget Configuration");
            println!("=========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Log level:          {}", settings.log_level);
            println!("  Progress bar width: {}", settings.progress_bar_width);
            match &settings.export_dir {
                Some(dir) => println!("  Export directory:   {}", dir.display()),
                None => println!("  Export directory:   (current directory)"),
            }
        }
        None => {
            println!("SplitBudget - Terminal 50/30/20 budgeting");
            println!();
            println!("Run 'splitbudget --help' for usage information.");
            println!("Run 'splitbudget summary' to see your budget.");
        }
    }

    Ok(())
}
