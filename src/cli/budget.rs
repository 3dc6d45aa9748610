//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::services::{total, BudgetPolicy, BudgetState, LedgerService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly budget (0 removes the limit)
    Set {
        /// Amount (e.g., "500" or "500.00")
        amount: String,
    },

    /// Show the budget and what remains of it
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let policy = BudgetPolicy::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { amount } => {
            let budget = policy.set_budget(&amount)?;
            match BudgetState::from_value(budget) {
                BudgetState::Set(value) => {
                    println!("Budget set to {}", value.format_with_symbol(symbol))
                }
                BudgetState::Unset => println!("Budget limit removed."),
            }
        }

        BudgetCommands::Show => match policy.state()? {
            BudgetState::Set(budget) => {
                let spent = total(&LedgerService::new(storage).load_all()?)?;
                let remaining = policy.remaining(budget, spent);
                println!("Budget:    {}", budget.format_with_symbol(symbol));
                println!("Spent:     {}", spent.format_with_symbol(symbol));
                println!("Remaining: {}", remaining.format_with_symbol(symbol));
            }
            BudgetState::Unset => println!("No budget set."),
        },
    }

    Ok(())
}
