//! Audit logging for the expense ledger
//!
//! Records every expense create/delete, budget change and reset in an
//! append-only JSONL log next to the data directory.
//!
//! - `AuditEntry`: one operation with timestamp, entity and before/after values.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
