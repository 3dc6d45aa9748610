//! Expense display formatting

use crate::config::Settings;
use crate::models::{ExpenseRecord, Money};

use super::{rule, truncate};

/// Format a single expense as a register row
pub fn format_expense_row(index: usize, record: &ExpenseRecord, settings: &Settings) -> String {
    format!(
        "{:>3}  {:12} {:24} {:12} {:>12}",
        index,
        record.id.short(),
        truncate(&record.name, 24),
        truncate(record.category.as_str(), 12),
        record.amount.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format a list of expenses with a total line
///
/// The leading column is the position in `records`, for use with
/// index-based deletion.
pub fn format_expense_register(
    records: &[ExpenseRecord],
    total: Money,
    settings: &Settings,
) -> String {
    if records.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:12} {:24} {:12} {:>12}\n",
        "#", "ID", "Name", "Category", "Amount"
    ));
    output.push_str(&rule(settings.theme, 67));
    output.push('\n');

    for (i, record) in records.iter().enumerate() {
        output.push_str(&format_expense_row(i, record, settings));
        output.push('\n');
    }

    output.push_str(&rule(settings.theme, 67));
    output.push('\n');
    output.push_str(&format!(
        "{:54} {:>12}\n",
        format!("Total ({} expense(s))", records.len()),
        total.format_with_symbol(&settings.currency_symbol)
    ));

    output
}

/// Format expense details for display
pub fn format_expense_details(record: &ExpenseRecord, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", record.id));
    output.push_str(&format!("Name:     {}\n", record.name));
    output.push_str(&format!("Category: {}\n", record.category));
    output.push_str(&format!(
        "Amount:   {}\n",
        record.amount.format_with_symbol(&settings.currency_symbol)
    ));

    output
}
