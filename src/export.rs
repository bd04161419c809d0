//! CSV export of expense records.

use std::io::Write;

use expense_domain::Expense;

use crate::errors::AppError;

pub const CSV_HEADERS: [&str; 5] = ["id", "title", "amount", "category", "created_at"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Writes `records` as CSV with a header row. Absent values become empty fields.
pub fn write_csv<W: Write>(records: &[Expense], writer: W) -> Result<(), AppError> {
    if records.is_empty() {
        return Err(AppError::EmptyExport);
    }

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADERS)?;
    for record in records {
        let created_at = record
            .created_at
            .map(|created| created.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_default();
        let amount = record.amount.to_string();
        csv.write_record([
            record.id.as_str(),
            record.title.as_str(),
            amount.as_str(),
            record.category.as_deref().unwrap_or_default(),
            created_at.as_str(),
        ])?;
    }
    csv.flush()?;
    tracing::info!(records = records.len(), "exported expenses to csv");
    Ok(())
}
