//! Service layer for the expense ledger
//!
//! The service layer provides the business rules on top of the storage layer:
//! validation, the budget check before insert, filtering and totals.

pub mod budget;
pub mod ledger;
pub mod report;

pub use budget::{remaining, BudgetPolicy, BudgetState};
pub use ledger::{total, LedgerService};
pub use report::{filter, ExpenseReport, FilterCriteria};
