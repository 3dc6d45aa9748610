//! Ledger service
//!
//! Provides the expense CRUD and aggregation rules: validation, the
//! budget check that runs before every insert, removal and the full reset.
//!
//! Every mutation is a read-modify-write of the whole ledger with
//! last-writer-wins semantics; a single writer is assumed.

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseId, ExpenseRecord, Money, NewExpense};
use crate::storage::Storage;

/// Sum of all amounts; zero for an empty slice
///
/// Fails with [`LedgerError::Validation`] when the sum leaves the money range.
pub fn total(records: &[ExpenseRecord]) -> LedgerResult<Money> {
    records
        .iter()
        .try_fold(Money::zero(), |acc, r| acc.checked_add(r.amount))
        .ok_or_else(total_out_of_range)
}

fn total_out_of_range() -> LedgerError {
    LedgerError::Validation("Total of expenses is out of range".into())
}

/// Service for expense management
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load the full ledger in insertion order
    ///
    /// A store that was never written yields an empty ledger. Unreadable data
    /// is reported as [`LedgerError::CorruptData`] and never discarded.
    pub fn load_all(&self) -> LedgerResult<Vec<ExpenseRecord>> {
        let records = self.storage.expenses.load()?;
        tracing::debug!(count = records.len(), "loaded ledger");
        Ok(records)
    }

    /// Validate and append an expense, enforcing `current_budget`
    ///
    /// A `current_budget` of zero means no limit. When the new total would
    /// exceed a positive budget the add is rejected with
    /// [`LedgerError::BudgetExceeded`] and nothing is written.
    pub fn add(&self, input: NewExpense, current_budget: Money) -> LedgerResult<ExpenseRecord> {
        let record = input
            .into_record()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let mut records = self.storage.expenses.load()?;
        let current_total = total(&records)?;
        let new_total = current_total
            .checked_add(record.amount)
            .ok_or_else(total_out_of_range)?;

        if current_budget.is_positive() && new_total > current_budget {
            let remaining = current_budget - current_total;
            tracing::warn!(
                amount = %record.amount,
                budget = %current_budget,
                remaining = %remaining,
                "expense rejected: budget would be exceeded"
            );
            return Err(LedgerError::BudgetExceeded {
                budget: current_budget,
                remaining,
            });
        }

        records.push(record.clone());
        self.storage.expenses.save(&records)?;

        tracing::info!(id = %record.id, amount = %record.amount, "expense added");
        self.storage.log_create(
            EntityType::Expense,
            record.id.to_string(),
            Some(record.name.clone()),
            &record,
        );

        Ok(record)
    }

    /// Add an expense against the budget currently stored
    pub fn add_within_stored_budget(&self, input: NewExpense) -> LedgerResult<ExpenseRecord> {
        let budget = self.storage.budget.load()?.unwrap_or_default();
        self.add(input, budget)
    }

    /// Remove the expense at `index` of the stored ledger
    ///
    /// Out-of-range indexes fail with [`LedgerError::Index`] and leave the
    /// store untouched. Prefer [`LedgerService::remove`], which cannot hit the
    /// wrong record when the caller's view is stale.
    pub fn remove_at(&self, index: usize) -> LedgerResult<ExpenseRecord> {
        let mut records = self.storage.expenses.load()?;
        if index >= records.len() {
            return Err(LedgerError::Index {
                index,
                len: records.len(),
            });
        }

        let removed = records.remove(index);
        self.persist_removal(&records, &removed)?;
        Ok(removed)
    }

    /// Remove the expense with the given id
    pub fn remove(&self, id: ExpenseId) -> LedgerResult<ExpenseRecord> {
        let mut records = self.storage.expenses.load()?;
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;

        let removed = records.remove(index);
        self.persist_removal(&records, &removed)?;
        Ok(removed)
    }

    fn persist_removal(
        &self,
        records: &[ExpenseRecord],
        removed: &ExpenseRecord,
    ) -> LedgerResult<()> {
        self.storage.expenses.save(records)?;

        tracing::info!(id = %removed.id, "expense removed");
        self.storage.log_delete(
            EntityType::Expense,
            removed.id.to_string(),
            Some(removed.name.clone()),
            removed,
        );
        Ok(())
    }

    /// Find an expense by full id or by a leading fragment such as "exp-1a2b3c4d"
    ///
    /// A fragment matching more than one expense is a validation error.
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<ExpenseRecord>> {
        let records = self.storage.expenses.load()?;

        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return Ok(records.into_iter().find(|r| r.id == id));
        }

        let mut matches = records.into_iter().filter(|r| r.id.matches_prefix(identifier));
        let first = matches.next();
        if matches.next().is_some() {
            return Err(LedgerError::Validation(format!(
                "'{}' matches more than one expense; use a longer id",
                identifier
            )));
        }
        Ok(first)
    }

    /// Sum of the given records
    pub fn total(&self, records: &[ExpenseRecord]) -> LedgerResult<Money> {
        total(records)
    }

    /// Clear the ledger and the budget in one store operation. Irreversible.
    pub fn reset_all(&self) -> LedgerResult<()> {
        // Summary is best effort: a reset must still work over unreadable data
        let summary = match (self.storage.expenses.load(), self.storage.budget.load()) {
            (Ok(records), Ok(budget)) => format!(
                "{} expense(s) totalling {}, budget {}",
                records.len(),
                total(&records).map_or_else(|_| "out of range".to_string(), |t| t.to_string()),
                budget.unwrap_or_default()
            ),
            _ => "stored data was unreadable".to_string(),
        };

        self.storage.clear()?;

        tracing::info!("ledger and budget reset");
        self.storage.log_reset(summary);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::storage::{KeyValueStore, MemoryStore, EXPENSES_KEY};
    use std::sync::Arc;

    fn expense(name: &str, amount: &str, category: &str) -> NewExpense {
        NewExpense::new(name, amount, category)
    }

    fn seeded(storage: &Storage, amounts: &[&str]) {
        let service = LedgerService::new(storage);
        for (i, amount) in amounts.iter().enumerate() {
            service
                .add(expense(&format!("Item {}", i), amount, "Other"), Money::zero())
                .unwrap();
        }
    }

    #[test]
    fn test_load_all_empty_store() {
        let storage = Storage::in_memory();
        let service = LedgerService::new(&storage);
        assert!(service.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_add_without_budget_always_succeeds() {
        let storage = Storage::in_memory();
        let service = LedgerService::new(&storage);

        for i in 1..=20 {
            service
                .add(expense("Rent", "1000000", "Other"), Money::zero())
                .unwrap();
            assert_eq!(service.load_all().unwrap().len(), i);
        }
    }

    #[test]
    fn test_add_round_trip_normalizes_amount() {
        let storage = Storage::in_memory();
        let service = LedgerService::new(&storage);

        let added = service
            .add(expense("Coffee", "3.5", "Food"), Money::zero())
            .unwrap();
        let records = service.load_all().unwrap();

        assert_eq!(records, vec![added.clone()]);
        assert_eq!(added.name, "Coffee");
        assert_eq!(added.amount.to_plain_string(), "3.50");
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let storage = Storage::in_memory();
        let service = LedgerService::new(&storage);

        for input in [
            expense("", "3", "Food"),
            expense("Coffee", "", "Food"),
            expense("Coffee", "3", ""),
            expense("Coffee", "three", "Food"),
            expense("Coffee", "-3", "Food"),
        ] {
            let err = service.add(input, Money::zero()).unwrap_err();
            assert!(err.is_validation(), "unexpected {:?}", err);
        }
        assert!(service.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_budget_boundary() {
        let storage = Storage::in_memory();
        seeded(&storage, &["50", "30"]);
        let service = LedgerService::new(&storage);
        let budget = Money::from_cents(10000);

        let err = service
            .add(expense("Dinner", "25", "Food"), budget)
            .unwrap_err();
        match err {
            LedgerError::BudgetExceeded { budget: b, remaining } => {
                assert_eq!(b, budget);
                assert_eq!(remaining, Money::from_cents(2000));
            }
            other => panic!("expected BudgetExceeded, got {:?}", other),
        }
        assert_eq!(service.load_all().unwrap().len(), 2);

        service.add(expense("Lunch", "20", "Food"), budget).unwrap();
        let records = service.load_all().unwrap();
        assert_eq!(total(&records).unwrap(), Money::from_cents(10000));

        // Exactly at the budget is allowed; a single cent more is not
        assert!(service
            .add(expense("Gum", "0.01", "Food"), budget)
            .unwrap_err()
            .is_budget_exceeded());
    }

    #[test]
    fn test_zero_amount_fits_a_full_budget() {
        let storage = Storage::in_memory();
        seeded(&storage, &["100"]);
        let service = LedgerService::new(&storage);

        service
            .add(expense("Sample", "0", "Food"), Money::from_cents(10000))
            .unwrap();
    }

    #[test]
    fn test_add_within_stored_budget() {
        let storage = Storage::in_memory();
        storage.budget.save(Money::from_cents(1000)).unwrap();
        let service = LedgerService::new(&storage);

        service
            .add_within_stored_budget(expense("Book", "8", "Other"))
            .unwrap();
        let err = service
            .add_within_stored_budget(expense("Pen", "2.50", "Other"))
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::BudgetExceeded { remaining, .. } if remaining == Money::from_cents(200)
        ));
    }

    #[test]
    fn test_total() {
        assert_eq!(total(&[]).unwrap(), Money::zero());

        let records = vec![
            ExpenseRecord::new("A", Money::from_cents(105), "Food"),
            ExpenseRecord::new("B", Money::from_cents(250), "Food"),
            ExpenseRecord::new("C", Money::from_cents(0), "Food"),
        ];
        assert_eq!(total(&records).unwrap(), Money::from_cents(355));
    }

    #[test]
    fn test_total_out_of_range() {
        let records = vec![
            ExpenseRecord::new("A", Money::from_cents(i64::MAX), "Other"),
            ExpenseRecord::new("B", Money::from_cents(1), "Other"),
        ];
        assert!(total(&records).unwrap_err().is_validation());
    }

    #[test]
    fn test_huge_amounts_are_rejected_not_wrapped() {
        let storage = Storage::in_memory();
        let service = LedgerService::new(&storage);
        let huge = "90000000000000000";

        service.add(expense("Yacht", huge, "Other"), Money::zero()).unwrap();

        let err = service
            .add(expense("Yacht", huge, "Other"), Money::from_cents(100))
            .unwrap_err();
        assert!(err.is_validation(), "unexpected {:?}", err);

        let err = service
            .add(expense("Yacht", huge, "Other"), Money::zero())
            .unwrap_err();
        assert!(err.is_validation(), "unexpected {:?}", err);

        let records = service.load_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(total(&records).unwrap(), records[0].amount);
    }

    #[test]
    fn test_audit_failure_does_not_fail_mutations() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        // A directory cannot be opened as the audit log file
        let logger = AuditLogger::new(temp_dir.path().to_path_buf());
        let storage = Storage::in_memory().with_audit(logger);
        let service = LedgerService::new(&storage);

        let added = service
            .add(expense("Coffee", "3", "Food"), Money::zero())
            .unwrap();
        assert_eq!(service.load_all().unwrap().len(), 1);

        service.remove(added.id).unwrap();
        assert!(service.load_all().unwrap().is_empty());

        service.reset_all().unwrap();
    }

    #[test]
    fn test_remove_at() {
        let storage = Storage::in_memory();
        seeded(&storage, &["1", "2", "3"]);
        let service = LedgerService::new(&storage);

        let removed = service.remove_at(1).unwrap();
        assert_eq!(removed.name, "Item 1");

        let names: Vec<_> = service
            .load_all()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Item 0", "Item 2"]);
    }

    #[test]
    fn test_remove_at_out_of_range_leaves_store_unchanged() {
        let store = Arc::new(MemoryStore::new());
        let storage = Storage::with_store(store.clone());
        seeded(&storage, &["1", "2"]);
        let before = store.get(EXPENSES_KEY).unwrap();

        let service = LedgerService::new(&storage);
        let err = service.remove_at(2).unwrap_err();
        assert!(matches!(err, LedgerError::Index { index: 2, len: 2 }));
        assert_eq!(store.get(EXPENSES_KEY).unwrap(), before);
    }

    #[test]
    fn test_remove_by_id() {
        let storage = Storage::in_memory();
        seeded(&storage, &["1", "2", "3"]);
        let service = LedgerService::new(&storage);

        let target = service.load_all().unwrap()[2].clone();
        // Another removal first: positions shift, the id still hits the right record
        service.remove_at(0).unwrap();

        let removed = service.remove(target.id).unwrap();
        assert_eq!(removed, target);
        assert_eq!(service.load_all().unwrap().len(), 1);

        assert!(service.remove(target.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_find() {
        let storage = Storage::in_memory();
        seeded(&storage, &["1", "2"]);
        let service = LedgerService::new(&storage);
        let first = service.load_all().unwrap()[0].clone();

        assert_eq!(service.find(&first.id.to_string()).unwrap(), Some(first.clone()));
        assert_eq!(service.find(&first.id.short()).unwrap(), Some(first));
        assert_eq!(service.find("not-an-id").unwrap(), None);
    }

    #[test]
    fn test_corrupt_ledger_blocks_mutation() {
        let store = Arc::new(MemoryStore::new());
        store.set(EXPENSES_KEY, "{oops").unwrap();
        let storage = Storage::with_store(store.clone());
        let service = LedgerService::new(&storage);

        assert!(service.load_all().unwrap_err().is_corrupt());
        assert!(service
            .add(expense("Tea", "1", "Food"), Money::zero())
            .unwrap_err()
            .is_corrupt());
        assert_eq!(store.get(EXPENSES_KEY).unwrap().as_deref(), Some("{oops"));
    }

    #[test]
    fn test_reset_all() {
        let storage = Storage::in_memory();
        seeded(&storage, &["4", "5"]);
        storage.budget.save(Money::from_cents(5000)).unwrap();
        let service = LedgerService::new(&storage);

        service.reset_all().unwrap();
        assert!(service.load_all().unwrap().is_empty());
        assert_eq!(storage.budget.load().unwrap(), None);
    }

    #[test]
    fn test_reset_all_recovers_corrupt_store() {
        let store = Arc::new(MemoryStore::new());
        store.set(EXPENSES_KEY, "garbage").unwrap();
        let storage = Storage::with_store(store);
        let service = LedgerService::new(&storage);

        service.reset_all().unwrap();
        assert!(service.load_all().unwrap().is_empty());
    }
}
