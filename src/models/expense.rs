//! Expense model
//!
//! An expense is a named, categorized, non-negative amount. Records are
//! immutable once created; the ledger only ever appends or removes them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::{two_decimal, Money, MoneyParseError};

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier, assigned at creation
    pub id: ExpenseId,

    /// What the money was spent on
    pub name: String,

    /// Amount spent, stored as two-decimal text
    #[serde(with = "two_decimal")]
    pub amount: Money,

    pub category: Category,
}

impl ExpenseRecord {
    /// Create a new record with a fresh id
    pub fn new(name: impl Into<String>, amount: Money, category: impl Into<Category>) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            category: category.into(),
        }
    }

    /// Check the record's invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::MissingName);
        }
        if self.category.as_str().trim().is_empty() {
            return Err(ExpenseValidationError::MissingCategory);
        }
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.name, self.category, self.amount)
    }
}

/// Unvalidated expense input as typed by a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewExpense {
    pub name: String,
    pub amount: String,
    pub category: String,
}

impl NewExpense {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            category: category.into(),
        }
    }

    /// Validate the input and turn it into a record with a fresh id
    ///
    /// The name and category are trimmed and the amount is normalized to
    /// whole cents.
    pub fn into_record(self) -> Result<ExpenseRecord, ExpenseValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ExpenseValidationError::MissingName);
        }

        let amount_text = self.amount.trim();
        if amount_text.is_empty() {
            return Err(ExpenseValidationError::MissingAmount);
        }

        let category = self.category.trim();
        if category.is_empty() {
            return Err(ExpenseValidationError::MissingCategory);
        }

        let amount = Money::parse(amount_text).map_err(ExpenseValidationError::InvalidAmount)?;

        let record = ExpenseRecord::new(name, amount, category);
        record.validate()?;
        Ok(record)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingName,
    MissingAmount,
    MissingCategory,
    InvalidAmount(MoneyParseError),
    NegativeAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "Expense name is required"),
            Self::MissingAmount => write!(f, "Expense amount is required"),
            Self::MissingCategory => write!(f, "Expense category is required"),
            Self::InvalidAmount(e) => write!(f, "{}", e),
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
