//! Reports module for the expense ledger
//!
//! The overall summary lives here; filtered views are built by
//! [`crate::services::ExpenseReport`].

pub mod summary;

pub use summary::SummaryReport;
