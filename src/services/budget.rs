//! Budget policy
//!
//! Stores and reads the monthly budget threshold and computes what is left.
//! A budget of zero means "unset": no limit is enforced when adding expenses.

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::storage::Storage;

/// `budget - total`. Negative when over budget; never clamped.
pub fn remaining(budget: Money, total: Money) -> Money {
    budget - total
}

/// Whether a budget limit is being enforced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetState {
    /// No limit (nothing stored, or zero stored)
    Unset,
    /// Adds are checked against this positive limit
    Set(Money),
}

impl BudgetState {
    pub fn from_value(value: Money) -> Self {
        if value.is_positive() {
            Self::Set(value)
        } else {
            Self::Unset
        }
    }

    pub fn is_enforced(&self) -> bool {
        matches!(self, Self::Set(_))
    }
}

/// Service for the budget threshold
pub struct BudgetPolicy<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetPolicy<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Parse and persist a new budget
    ///
    /// Empty, non-numeric and negative input is rejected with
    /// [`LedgerError::Validation`].
    pub fn set_budget(&self, value: &str) -> LedgerResult<Money> {
        let value = value.trim();
        if value.is_empty() {
            return Err(LedgerError::Validation("Budget amount is required".into()));
        }

        let budget = Money::parse(value)
            .map_err(|e| LedgerError::Validation(format!("Invalid budget: {}", e)))?;
        if budget.is_negative() {
            return Err(LedgerError::Validation(format!(
                "Budget cannot be negative: {}",
                budget
            )));
        }

        // Only needed for the audit trail; an unreadable old value is replaced
        let before = match self.storage.budget.load() {
            Ok(before) => before,
            Err(e) => {
                tracing::warn!(error = %e, "overwriting unreadable budget");
                None
            }
        };
        self.storage.budget.save(budget)?;

        tracing::info!(budget = %budget, "budget set");
        let before_text = before.map_or_else(|| "unset".to_string(), |b| b.to_string());
        self.storage.log_update(
            EntityType::Budget,
            "budget",
            None,
            &before.map(|b| b.to_plain_string()),
            &Some(budget.to_plain_string()),
            Some(format!("budget: {} -> {}", before_text, budget)),
        );

        Ok(budget)
    }

    /// The stored budget, or zero when none is set
    pub fn get_budget(&self) -> LedgerResult<Money> {
        Ok(self.storage.budget.load()?.unwrap_or_default())
    }

    pub fn state(&self) -> LedgerResult<BudgetState> {
        Ok(BudgetState::from_value(self.get_budget()?))
    }

    pub fn remaining(&self, budget: Money, total: Money) -> Money {
        remaining(budget, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::services::LedgerService;
    use crate::storage::{KeyValueStore, MemoryStore, BUDGET_KEY};
    use std::sync::Arc;

    #[test]
    fn test_unset_by_default() {
        let storage = Storage::in_memory();
        let policy = BudgetPolicy::new(&storage);

        assert_eq!(policy.get_budget().unwrap(), Money::zero());
        assert_eq!(policy.state().unwrap(), BudgetState::Unset);
    }

    #[test]
    fn test_set_and_get() {
        let storage = Storage::in_memory();
        let policy = BudgetPolicy::new(&storage);

        let budget = policy.set_budget(" 250.5 ").unwrap();
        assert_eq!(budget, Money::from_cents(25050));
        assert_eq!(policy.get_budget().unwrap(), budget);
        assert_eq!(policy.state().unwrap(), BudgetState::Set(budget));

        policy.set_budget("100").unwrap();
        assert_eq!(policy.get_budget().unwrap(), Money::from_cents(10000));
    }

    #[test]
    fn test_zero_budget_reads_as_unset() {
        let storage = Storage::in_memory();
        let policy = BudgetPolicy::new(&storage);

        policy.set_budget("0").unwrap();
        assert_eq!(policy.state().unwrap(), BudgetState::Unset);
        assert!(!policy.state().unwrap().is_enforced());
    }

    #[test]
    fn test_invalid_budgets() {
        let storage = Storage::in_memory();
        let policy = BudgetPolicy::new(&storage);

        for input in ["", "  ", "lots", "12abc", "-5"] {
            assert!(
                policy.set_budget(input).unwrap_err().is_validation(),
                "accepted {:?}",
                input
            );
        }
        assert_eq!(storage.budget.load().unwrap(), None);
    }

    #[test]
    fn test_set_budget_replaces_unreadable_value() {
        let store = Arc::new(MemoryStore::new());
        store.set(BUDGET_KEY, "plenty").unwrap();
        let storage = Storage::with_store(store);
        let policy = BudgetPolicy::new(&storage);

        assert!(policy.get_budget().unwrap_err().is_corrupt());

        policy.set_budget("100").unwrap();
        assert_eq!(policy.get_budget().unwrap(), Money::from_cents(10000));
    }

    #[test]
    fn test_set_budget_survives_audit_failure() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().to_path_buf());
        let storage = Storage::in_memory().with_audit(logger);
        let policy = BudgetPolicy::new(&storage);

        policy.set_budget("40").unwrap();
        assert_eq!(policy.get_budget().unwrap(), Money::from_cents(4000));
    }

    #[test]
    fn test_remaining_may_go_negative() {
        assert_eq!(
            remaining(Money::from_cents(10000), Money::from_cents(8000)),
            Money::from_cents(2000)
        );
        assert_eq!(
            remaining(Money::from_cents(10000), Money::from_cents(12550)),
            Money::from_cents(-2550)
        );
        assert_eq!(remaining(Money::zero(), Money::from_cents(300)).cents(), -300);
    }

    #[test]
    fn test_reset_returns_to_unset() {
        let storage = Storage::in_memory();
        let policy = BudgetPolicy::new(&storage);
        policy.set_budget("75").unwrap();

        LedgerService::new(&storage).reset_all().unwrap();
        assert_eq!(policy.get_budget().unwrap(), Money::zero());
        assert_eq!(policy.state().unwrap(), BudgetState::Unset);
    }
}
