//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod settings;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{
    handle_add, handle_audit, handle_delete, handle_export, handle_list, handle_reset,
    handle_show, handle_summary, AddArgs, AuditEntity, DeleteArgs, FilterArgs,
};
pub use settings::{handle_config, handle_theme, ThemeChoice};
