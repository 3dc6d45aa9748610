//! Export module for the expense ledger
//!
//! - CSV: spreadsheet-compatible expense rows

pub mod csv;

pub use self::csv::export_expenses_csv;
