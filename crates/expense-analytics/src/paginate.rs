use expense_domain::Page;

use crate::AnalyticsError;

/// Cuts page `page` (1-based) of `page_size` items out of `records`.
///
/// Out-of-range pages, including page 0, yield an empty page rather than an error; a zero
/// `page_size` is rejected.
pub fn paginate<T: Clone>(
    records: &[T],
    page: usize,
    page_size: usize,
) -> Result<Page<T>, AnalyticsError> {
    if page_size == 0 {
        return Err(AnalyticsError::InvalidArgument(
            "page size must be at least 1".into(),
        ));
    }

    let items = match page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(page_size).min(records.len());
            let end = start.saturating_add(page_size).min(records.len());
            records[start..end].to_vec()
        }
        None => Vec::new(),
    };

    Ok(Page {
        items,
        page_number: page.max(1),
        page_size,
        total_items: records.len(),
    })
}
