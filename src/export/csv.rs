//! CSV Export functionality
//!
//! Exports the ledger as `ID,Name,Category,Amount` rows.

use std::io::Write;

use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::ExpenseRecord;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
}

/// Write expenses to CSV, amounts as two-decimal text
pub fn export_expenses_csv<W: Write>(records: &[ExpenseRecord], writer: W) -> LedgerResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    if records.is_empty() {
        // serde only emits headers alongside the first row
        csv_writer.write_record(["ID", "Name", "Category", "Amount"])?;
    }

    for record in records {
        csv_writer.serialize(CsvRow {
            id: record.id.to_string(),
            name: &record.name,
            category: record.category.as_str(),
            amount: record.amount.to_plain_string(),
        })?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_export_rows() {
        let records = vec![
            ExpenseRecord::new("Coffee", Money::from_cents(350), "Food"),
            ExpenseRecord::new("Dinner, with friends", Money::from_cents(4200), "Food"),
        ];

        let mut output = Vec::new();
        export_expenses_csv(&records, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "ID,Name,Category,Amount");
        assert_eq!(lines[1], format!("{},Coffee,Food,3.50", records[0].id));
        assert_eq!(
            lines[2],
            format!("{},\"Dinner, with friends\",Food,42.00", records[1].id)
        );
    }

    #[test]
    fn test_export_empty_has_header() {
        let mut output = Vec::new();
        export_expenses_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "ID,Name,Category,Amount\n");
    }
}
