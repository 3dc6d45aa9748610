//! Summary display formatting

use crate::config::Settings;
use crate::reports::SummaryReport;
use crate::services::BudgetState;

use super::rule;

/// Format the summary screen: totals, budget and recent expenses
pub fn format_summary(summary: &SummaryReport, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str("Expense Summary\n");
    output.push_str(&rule(settings.theme, 40));
    output.push('\n');
    output.push_str(&format!(
        "Total expenses: {}\n",
        summary.total.format_with_symbol(symbol)
    ));

    match summary.state {
        BudgetState::Set(budget) => {
            output.push_str(&format!(
                "Budget:         {}\n",
                budget.format_with_symbol(symbol)
            ));
            output.push_str(&format!(
                "Remaining:      {}{}\n",
                summary.remaining.format_with_symbol(symbol),
                if summary.is_over_budget() {
                    "  (over budget)"
                } else {
                    ""
                }
            ));
        }
        BudgetState::Unset => output.push_str("Budget:         not set\n"),
    }

    output.push('\n');
    output.push_str("Recent expenses\n");
    if summary.recent.is_empty() {
        output.push_str("  No recent expenses.\n");
    } else {
        for record in &summary.recent {
            output.push_str(&format!(
                "  {:28} {:>10}\n",
                record.name,
                record.amount.format_with_symbol(symbol)
            ));
        }
    }

    output
}
