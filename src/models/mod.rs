//! Core data models for the expense ledger
//!
//! This module contains the data structures of the ledger domain: expense
//! records, their categories and identifiers, and the money type.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::Category;
pub use expense::{ExpenseRecord, ExpenseValidationError, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
