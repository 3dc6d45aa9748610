//! Summary Report
//!
//! The at-a-glance view: overall total, budget, what remains, and the most
//! recent expenses.

use crate::error::LedgerResult;
use crate::models::{ExpenseRecord, Money};
use crate::services::{remaining, total, BudgetPolicy, BudgetState, LedgerService};
use crate::storage::Storage;

/// Summary Report
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// Sum of every recorded expense
    pub total: Money,
    /// Stored budget, zero when unset
    pub budget: Money,
    pub state: BudgetState,
    /// `budget - total`, negative when over budget
    pub remaining: Money,
    pub expense_count: usize,
    /// Latest expenses, oldest first
    pub recent: Vec<ExpenseRecord>,
}

impl SummaryReport {
    /// Generate the summary, keeping the last `recent_count` expenses
    pub fn generate(storage: &Storage, recent_count: usize) -> LedgerResult<Self> {
        let records = LedgerService::new(storage).load_all()?;
        let budget = BudgetPolicy::new(storage).get_budget()?;

        Self::from_parts(&records, budget, recent_count)
    }

    pub fn from_parts(
        records: &[ExpenseRecord],
        budget: Money,
        recent_count: usize,
    ) -> LedgerResult<Self> {
        let total = total(records)?;
        let start = records.len().saturating_sub(recent_count);

        Ok(Self {
            total,
            budget,
            state: BudgetState::from_value(budget),
            remaining: remaining(budget, total),
            expense_count: records.len(),
            recent: records[start..].to_vec(),
        })
    }

    pub fn is_over_budget(&self) -> bool {
        self.state.is_enforced() && self.remaining.is_negative()
    }
}
