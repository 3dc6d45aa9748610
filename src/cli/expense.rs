//! Expense CLI commands
//!
//! Add, list, show, delete and export expenses, plus the summary screen and
//! the full reset.

use std::fs::File;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::audit::EntityType;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_register, format_summary};
use crate::error::{LedgerError, LedgerResult};
use crate::export::export_expenses_csv;
use crate::models::NewExpense;
use crate::reports::SummaryReport;
use crate::services::{ExpenseReport, FilterCriteria, LedgerService};
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    pub name: String,
    /// Amount (e.g., "12" or "12.50")
    pub amount: String,
    /// Category (Food, Transport, Other or any label)
    pub category: String,
}

/// Filter arguments shared by `list` and `export`
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Only expenses whose name contains this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,
    /// Only expenses in this exact category
    #[arg(short, long)]
    pub category: Option<String>,
}

impl FilterArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_term: self.search.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
        }
    }
}

/// Arguments for `delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Expense ID (full or the short "exp-..." form)
    #[arg(required_unless_present = "index")]
    pub id: Option<String>,
    /// Position in the unfiltered `list` output instead of an ID
    #[arg(long, conflicts_with = "id")]
    pub index: Option<usize>,
}

/// Entity filter for `audit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AuditEntity {
    Expense,
    Budget,
    /// Full resets
    Ledger,
}

impl From<AuditEntity> for EntityType {
    fn from(entity: AuditEntity) -> Self {
        match entity {
            AuditEntity::Expense => EntityType::Expense,
            AuditEntity::Budget => EntityType::Budget,
            AuditEntity::Ledger => EntityType::Ledger,
        }
    }
}

/// Show totals, budget and recent expenses
pub fn handle_summary(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let summary = SummaryReport::generate(storage, settings.recent_count)?;
    print!("{}", format_summary(&summary, settings));
    Ok(())
}

pub fn handle_add(storage: &Storage, settings: &Settings, args: AddArgs) -> LedgerResult<()> {
    let service = LedgerService::new(storage);
    let record =
        service.add_within_stored_budget(NewExpense::new(args.name, args.amount, args.category))?;

    if !record.category.is_built_in() && !settings.categories.contains(&record.category.to_string()) {
        println!("Note: '{}' is not one of your categories.", record.category);
    }

    println!("Expense added successfully!");
    print!("{}", format_expense_details(&record, settings));
    Ok(())
}

pub fn handle_list(storage: &Storage, settings: &Settings, args: FilterArgs) -> LedgerResult<()> {
    let records = LedgerService::new(storage).load_all()?;
    let report = ExpenseReport::build(&records, args.criteria())?;

    if !report.criteria.is_empty() {
        println!(
            "Showing {} of {} expense(s)",
            report.records.len(),
            records.len()
        );
    }
    print!(
        "{}",
        format_expense_register(&report.records, report.total, settings)
    );
    Ok(())
}

pub fn handle_show(storage: &Storage, settings: &Settings, id: &str) -> LedgerResult<()> {
    let record = LedgerService::new(storage)
        .find(id)?
        .ok_or_else(|| LedgerError::expense_not_found(id))?;
    print!("{}", format_expense_details(&record, settings));
    Ok(())
}

pub fn handle_delete(storage: &Storage, args: DeleteArgs) -> LedgerResult<()> {
    let service = LedgerService::new(storage);

    let removed = match (args.index, args.id) {
        (Some(index), _) => service.remove_at(index)?,
        (None, Some(id)) => {
            let record = service
                .find(&id)?
                .ok_or_else(|| LedgerError::expense_not_found(id.as_str()))?;
            service.remove(record.id)?
        }
        (None, None) => {
            return Err(LedgerError::Validation(
                "Give an expense ID or --index".into(),
            ))
        }
    };

    println!("Expense deleted: {}", removed);
    Ok(())
}

pub fn handle_export(storage: &Storage, path: PathBuf, filter: FilterArgs) -> LedgerResult<()> {
    let records = LedgerService::new(storage).load_all()?;
    let report = ExpenseReport::build(&records, filter.criteria())?;

    let file = File::create(&path)
        .map_err(|e| LedgerError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    export_expenses_csv(&report.records, file)?;

    println!(
        "Exported {} expense(s) to {}",
        report.records.len(),
        path.display()
    );
    Ok(())
}

/// Wipe all expenses and the budget
pub fn handle_reset(storage: &Storage, confirmed: bool) -> LedgerResult<()> {
    if !confirmed {
        return Err(LedgerError::Validation(
            "Reset deletes every expense and the budget. Re-run with --yes to confirm".into(),
        ));
    }

    LedgerService::new(storage).reset_all()?;
    println!("All data has been reset!");
    Ok(())
}

/// Print the latest audit log entries
pub fn handle_audit(
    storage: &Storage,
    limit: usize,
    entity: Option<AuditEntity>,
) -> LedgerResult<()> {
    let Some(logger) = storage.audit_log() else {
        println!("Audit logging is not enabled.");
        return Ok(());
    };

    let entries = logger.read_recent(limit, entity.map(EntityType::from))?;
    if entries.is_empty() {
        println!("No audit entries.");
    }
    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
