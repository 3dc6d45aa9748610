//! Storage layer for the expense ledger
//!
//! A key-value store holding two text values (`expenses` and `budget`),
//! repositories that encode them, and an optional audit log.

pub mod budget;
pub mod expenses;
pub mod file_io;
pub mod store;

pub use budget::{BudgetRepository, BUDGET_KEY};
pub use expenses::{ExpenseRepository, EXPENSES_KEY};
pub use file_io::{read_json, write_json_atomic};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use std::sync::Arc;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    store: Arc<dyn KeyValueStore>,
    pub expenses: ExpenseRepository,
    pub budget: BudgetRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Open the file-backed store under the configured data directory
    pub fn open(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        let store = Arc::new(FileStore::new(paths.store_file()));
        Ok(Self::with_store(store).with_audit(AuditLogger::new(paths.audit_log())))
    }

    /// Storage over an in-process store, without an audit log
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Storage over any key-value backend
    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            expenses: ExpenseRepository::new(store.clone()),
            budget: BudgetRepository::new(store.clone()),
            store,
            audit: None,
        }
    }

    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn audit_log(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Remove every key (ledger and budget) in one store operation
    pub fn clear(&self) -> Result<(), LedgerError> {
        self.store.clear()
    }

    /// Log an entity creation, if auditing is enabled
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log(|| AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Log an entity update, if auditing is enabled
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) {
        self.log(|| {
            AuditEntry::update(entity_type, entity_id, entity_name, before, after, diff_summary)
        })
    }

    /// Log an entity deletion, if auditing is enabled
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log(|| AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    /// Log a full reset, if auditing is enabled
    pub fn log_reset(&self, summary: impl Into<String>) {
        self.log(|| AuditEntry::reset(summary))
    }

    // Called after the store write has succeeded, so a failure here must not
    // turn a completed change into an error
    fn log(&self, entry: impl FnOnce() -> AuditEntry) {
        let Some(logger) = &self.audit else {
            return;
        };
        let entry = entry();
        if let Err(e) = logger.log(&entry) {
            tracing::warn!(
                error = %e,
                operation = %entry.operation,
                entity = %entry.entity_id,
                "failed to write audit entry"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, Money};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.expenses.load().unwrap().is_empty());
        assert_eq!(storage.budget.load().unwrap(), None);
    }

    #[test]
    fn test_clear_wipes_both_keys() {
        let storage = Storage::in_memory();
        storage
            .expenses
            .save(&[ExpenseRecord::new("Tea", Money::from_cents(200), "Food")])
            .unwrap();
        storage.budget.save(Money::from_cents(5000)).unwrap();

        storage.clear().unwrap();
        assert!(storage.expenses.load().unwrap().is_empty());
        assert_eq!(storage.budget.load().unwrap(), None);
    }

    #[test]
    fn test_audit_only_when_enabled() {
        let storage = Storage::in_memory();
        assert!(storage.audit_log().is_none());
        storage.log_reset("nothing");

        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let storage = Storage::in_memory().with_audit(logger);
        storage.log_reset("nothing");
        assert_eq!(storage.audit_log().unwrap().read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_unwritable_audit_log_is_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened for appending
        let logger = AuditLogger::new(temp_dir.path().to_path_buf());
        let storage = Storage::in_memory().with_audit(logger);

        storage.log_reset("nothing");
        assert!(storage.audit_log().is_some());
    }
}
