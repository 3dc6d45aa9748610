//! Report filter
//!
//! Derives a filtered view of the ledger by name substring and category.
//! Filtering is recomputed from scratch on every call; ledgers are small.

use crate::error::LedgerResult;
use crate::models::{ExpenseRecord, Money};

use super::ledger::total;

/// Criteria for filtering expenses. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the expense name
    pub search_term: String,
    /// Exact category text
    pub category: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by name substring
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.category.is_empty()
    }

    /// Check a single record against the criteria
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        let name_matches = self.search_term.is_empty()
            || record
                .name
                .to_lowercase()
                .contains(&self.search_term.to_lowercase());
        let category_matches = self.category.is_empty() || record.category.matches(&self.category);

        name_matches && category_matches
    }
}

/// Records matching `criteria`, in their original order
pub fn filter(records: &[ExpenseRecord], criteria: &FilterCriteria) -> Vec<ExpenseRecord> {
    records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}

/// A filtered view of the ledger with its total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseReport {
    pub criteria: FilterCriteria,
    pub records: Vec<ExpenseRecord>,
    pub total: Money,
}

impl ExpenseReport {
    pub fn build(records: &[ExpenseRecord], criteria: FilterCriteria) -> LedgerResult<Self> {
        let records = filter(records, &criteria);
        let total = total(&records)?;
        Ok(Self {
            criteria,
            records,
            total,
        })
    }
}
