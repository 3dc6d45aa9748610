//! Expense Ledger - personal expense tracking with a monthly budget guard
//!
//! This library provides the ledger core: recording categorized expenses,
//! refusing expenses that would exceed the budget, filtered views with
//! totals, and the budget threshold itself. Front ends (the bundled CLI or
//! any other) call into the services and never touch storage directly.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records, categories, ids and money
//! - `storage`: Key-value store backends and repositories
//! - `services`: Ledger service, budget policy, report filter
//! - `reports`: Summary report
//! - `audit`: Audit logging system
//! - `export`: CSV export
//! - `display`, `cli`: Terminal front end
//!
//! # Example
//!
//! ```
//! use expense_ledger::models::{Money, NewExpense};
//! use expense_ledger::services::{BudgetPolicy, LedgerService};
//! use expense_ledger::storage::Storage;
//!
//! let storage = Storage::in_memory();
//! BudgetPolicy::new(&storage).set_budget("100").unwrap();
//!
//! let ledger = LedgerService::new(&storage);
//! ledger.add_within_stored_budget(NewExpense::new("Coffee", "3.50", "Food")).unwrap();
//! assert_eq!(ledger.total(&ledger.load_all().unwrap()).unwrap(), Money::from_cents(350));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

use std::sync::Once;

pub use error::{LedgerError, LedgerResult};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr
///
/// Filtering follows `RUST_LOG`, defaulting to warnings from this crate.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("expense_ledger=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
