//! Expense repository
//!
//! Loads and saves the whole ledger under the `expenses` key. The ledger is
//! always read and written wholesale.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::money::two_decimal;
use crate::models::{Category, ExpenseId, ExpenseRecord, Money};

use super::store::KeyValueStore;

/// Store key holding the serialized ledger
pub const EXPENSES_KEY: &str = "expenses";

/// On-disk shape of a record. Entries written before records carried ids
/// have no `id` field.
#[derive(Debug, Deserialize, Serialize)]
struct StoredExpense {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<ExpenseId>,
    name: String,
    #[serde(with = "two_decimal")]
    amount: Money,
    category: Category,
}

/// Repository for ledger persistence
pub struct ExpenseRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ExpenseRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the full ledger in insertion order
    ///
    /// A missing key is an empty ledger. Records without an id are given one
    /// and the ledger is written back, so ids stay stable across loads.
    pub fn load(&self) -> LedgerResult<Vec<ExpenseRecord>> {
        let Some(text) = self.store.get(EXPENSES_KEY)? else {
            return Ok(Vec::new());
        };

        let stored: Vec<StoredExpense> =
            serde_json::from_str(&text).map_err(|e| LedgerError::corrupt(EXPENSES_KEY, e))?;

        let mut migrated = 0usize;
        let records: Vec<ExpenseRecord> = stored
            .into_iter()
            .map(|s| {
                let id = s.id.unwrap_or_else(|| {
                    migrated += 1;
                    ExpenseId::new()
                });
                ExpenseRecord {
                    id,
                    name: s.name,
                    amount: s.amount,
                    category: s.category,
                }
            })
            .collect();

        for record in &records {
            record
                .validate()
                .map_err(|e| LedgerError::corrupt(EXPENSES_KEY, e))?;
        }

        if migrated > 0 {
            tracing::info!(count = migrated, "assigned ids to legacy expense records");
            self.save(&records)?;
        }

        Ok(records)
    }

    /// Replace the stored ledger
    pub fn save(&self, records: &[ExpenseRecord]) -> LedgerResult<()> {
        let text = serde_json::to_string(records)
            .map_err(|e| LedgerError::Storage(format!("Failed to serialize expenses: {}", e)))?;
        self.store.set(EXPENSES_KEY, &text)
    }
}
