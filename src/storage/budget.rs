//! Budget repository
//!
//! Persists the monthly budget threshold under the `budget` key as plain
//! decimal text, independently of the ledger.

use std::sync::Arc;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

use super::store::KeyValueStore;

/// Store key holding the budget threshold
pub const BUDGET_KEY: &str = "budget";

/// Repository for the budget threshold
pub struct BudgetRepository {
    store: Arc<dyn KeyValueStore>,
}

impl BudgetRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the stored threshold, `None` if it was never set
    pub fn load(&self) -> LedgerResult<Option<Money>> {
        let Some(text) = self.store.get(BUDGET_KEY)? else {
            return Ok(None);
        };

        let value = Money::parse(&text).map_err(|e| LedgerError::corrupt(BUDGET_KEY, e))?;
        if value.is_negative() {
            return Err(LedgerError::corrupt(
                BUDGET_KEY,
                format!("negative budget {}", value),
            ));
        }
        Ok(Some(value))
    }

    /// Overwrite the stored threshold
    pub fn save(&self, value: Money) -> LedgerResult<()> {
        self.store.set(BUDGET_KEY, &value.to_plain_string())
    }
}
