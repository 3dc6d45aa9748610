use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_add, handle_audit, handle_budget_command, handle_config, handle_delete, handle_export,
    handle_list, handle_reset, handle_show, handle_summary, handle_theme, AddArgs, AuditEntity,
    BudgetCommands, DeleteArgs, FilterArgs, ThemeChoice,
};
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track expenses against a monthly budget",
    long_about = "Record categorized expenses, set a monthly budget that blocks \
                  expenses exceeding it, and search or filter what you spent."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show total spending, budget and recent expenses
    #[command(alias = "home")]
    Summary,

    /// Record a new expense
    Add(AddArgs),

    /// List expenses, optionally filtered
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Show one expense
    Show {
        /// Expense ID (full or the short "exp-..." form)
        id: String,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export expenses to a CSV file
    Export {
        /// Output file
        file: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Delete all expenses and the budget
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Show or change the display theme
    Theme {
        #[arg(value_enum)]
        choice: Option<ThemeChoice>,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Only entries about this kind of entity
        #[arg(short, long, value_enum)]
        entity: Option<AuditEntity>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    expense_ledger::init_tracing();
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::open(&paths)?;

    match cli.command.unwrap_or(Commands::Summary) {
        Commands::Summary => handle_summary(&storage, &settings)?,
        Commands::Add(args) => handle_add(&storage, &settings, args)?,
        Commands::List(filter) => handle_list(&storage, &settings, filter)?,
        Commands::Show { id } => handle_show(&storage, &settings, &id)?,
        Commands::Delete(args) => handle_delete(&storage, args)?,
        Commands::Budget(cmd) => handle_budget_command(&storage, &settings, cmd)?,
        Commands::Export { file, filter } => handle_export(&storage, file, filter)?,
        Commands::Reset { yes } => handle_reset(&storage, yes)?,
        Commands::Theme { choice } => handle_theme(&paths, &mut settings, choice)?,
        Commands::Audit { limit, entity } => handle_audit(&storage, limit, entity)?,
        Commands::Config => handle_config(&paths, &settings)?,
    }

    Ok(())
}
