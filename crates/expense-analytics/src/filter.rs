//! List-view filter pipeline.
//!
//! Stages run in a fixed order and each is a no-op when its criterion is absent:
//! text search, lower date bound, upper date bound, exact category.

use expense_domain::{Expense, FilterCriteria};

/// Returns the records matching `criteria`, preserving their relative order.
pub fn filter_expenses(records: &[Expense], criteria: &FilterCriteria) -> Vec<Expense> {
    let query = criteria.query().map(str::to_lowercase);
    let category = criteria.category_filter();

    records
        .iter()
        .filter(|record| {
            query
                .as_deref()
                .map_or(true, |query| matches_text(record, query))
        })
        .filter(|record| {
            criteria.date_from.map_or(true, |bound| {
                record.created_at.is_some_and(|created| created >= bound)
            })
        })
        .filter(|record| {
            criteria.date_to.map_or(true, |bound| {
                record.created_at.is_some_and(|created| created <= bound)
            })
        })
        .filter(|record| category.map_or(true, |label| record.normalized_category() == label))
        .cloned()
        .collect()
}

/// Case-insensitive substring match against title, normalized category and amount.
///
/// `query` must already be lowercase.
pub fn matches_text(record: &Expense, query: &str) -> bool {
    record.title.to_lowercase().contains(query)
        || record.normalized_category().to_lowercase().contains(query)
        || record.amount_text().contains(query)
}
