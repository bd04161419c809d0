//! Summary aggregates over a record collection.
//!
//! Every sum coerces non-finite amounts to zero so summary widgets always have something to show.

use std::collections::HashMap;

use chrono::NaiveDate;
use expense_domain::{sum_amounts, CategoryTotal, DominantCategory, Expense, MonthKey, TrendBucket};

/// Number of months in the dashboard trend unless configured otherwise.
pub const DEFAULT_TREND_WINDOW: usize = 6;

/// Builds `window_size` consecutive monthly buckets ending at `reference`'s month, oldest first.
///
/// Months without records report a zero total; records outside the window or without a
/// timestamp are ignored.
pub fn monthly_trend(
    records: &[Expense],
    window_size: usize,
    reference: NaiveDate,
) -> Vec<TrendBucket> {
    if window_size == 0 {
        return Vec::new();
    }
    let span = i32::try_from(window_size - 1).unwrap_or(i32::MAX);
    let oldest = MonthKey::of(&reference).shift(-span);

    let mut buckets: Vec<TrendBucket> = (0..window_size)
        .map(|offset| TrendBucket::empty(oldest.shift(offset as i32)))
        .collect();
    let positions: HashMap<MonthKey, usize> = buckets
        .iter()
        .enumerate()
        .map(|(index, bucket)| (bucket.period, index))
        .collect();

    for record in records {
        let Some(created) = record.created_at else {
            continue;
        };
        if let Some(&index) = positions.get(&MonthKey::of(&created)) {
            buckets[index].total += record.amount_value();
        }
    }
    buckets
}

/// Sums amounts per normalized category.
///
/// Groups appear in the order their category was first encountered in `records`.
pub fn category_breakdown(records: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let category = record.normalized_category();
        match positions.get(category) {
            Some(&index) => totals[index].total += record.amount_value(),
            None => {
                positions.insert(category, totals.len());
                totals.push(CategoryTotal {
                    category: category.to_string(),
                    total: record.amount_value(),
                });
            }
        }
    }
    totals
}

/// Picks the category with the strictly largest total.
///
/// Ties go to the category encountered first in [`category_breakdown`] order. With no records
/// the category is absent and the total is zero.
pub fn dominant_category(records: &[Expense]) -> DominantCategory {
    category_breakdown(records)
        .into_iter()
        .fold(None::<CategoryTotal>, |best, candidate| match best {
            Some(current) if candidate.total <= current.total => Some(current),
            _ => Some(candidate),
        })
        .map(|winner| DominantCategory {
            category: Some(winner.category),
            total: winner.total,
        })
        .unwrap_or_default()
}

/// Sums records stamped in the same calendar year and month as `reference`.
pub fn current_period_total(records: &[Expense], reference: NaiveDate) -> f64 {
    let period = MonthKey::of(&reference);
    sum_amounts(
        records
            .iter()
            .filter(|record| record.created_at.is_some_and(|created| period.contains(&created))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn spent(amount: f64, category: Option<&str>, date: Option<NaiveDate>) -> Expense {
        let expense = Expense::new("item", amount, category.map(str::to_string));
        match date {
            Some(date) => expense.created_on(date),
            None => expense,
        }
    }

    #[test]
    fn trend_always_has_window_size_buckets() {
        let records = vec![spent(10.0, None, Some(day(2020, 1, 1)))];
        let trend = monthly_trend(&records, 6, day(2025, 3, 15));
        assert_eq!(trend.len(), 6);
        assert!(trend.iter().all(|bucket| bucket.total == 0.0));
        let labels: Vec<_> = trend.iter().map(|b| b.period_label.as_str()).collect();
        assert_eq!(labels, ["10/2024", "11/2024", "12/2024", "1/2025", "2/2025", "3/2025"]);
    }

    #[test]
    fn trend_sum_matches_records_inside_window() {
        let records = vec![
            spent(5.0, None, Some(day(2024, 12, 31))),
            spent(7.5, None, Some(day(2025, 1, 1))),
            spent(2.5, None, Some(day(2025, 2, 28))),
            spent(100.0, None, Some(day(2025, 3, 1))),
            spent(100.0, None, None),
            spent(f64::NAN, None, Some(day(2025, 2, 2))),
        ];
        let trend = monthly_trend(&records, 2, day(2025, 2, 10));
        let total: f64 = trend.iter().map(|bucket| bucket.total).sum();
        assert_eq!(total, 10.0);
        assert_eq!(trend[0].total, 7.5);
        assert_eq!(trend[1].total, 2.5);
    }

    #[test]
    fn zero_window_is_empty() {
        assert!(monthly_trend(&[], 0, day(2025, 1, 1)).is_empty());
    }

    #[test]
    fn breakdown_groups_by_normalized_category_in_encounter_order() {
        let records = vec![
            spent(3.0, Some("Travel"), None),
            spent(4.0, None, None),
            spent(5.0, Some("Travel"), None),
            spent(6.0, Some(""), None),
        ];
        let breakdown = category_breakdown(&records);
        assert_eq!(
            breakdown,
            vec![
                CategoryTotal { category: "Travel".into(), total: 8.0 },
                CategoryTotal { category: "Uncategorized".into(), total: 10.0 },
            ]
        );
    }

    #[test]
    fn dominant_category_breaks_ties_by_first_encounter() {
        let records = vec![
            spent(50.0, Some("Rent"), None),
            spent(50.0, Some("Food"), None),
        ];
        let dominant = dominant_category(&records);
        assert_eq!(dominant.category.as_deref(), Some("Rent"));
        assert_eq!(dominant.total, 50.0);
    }

    #[test]
    fn dominant_category_handles_negative_totals() {
        let records = vec![spent(-5.0, Some("Refund"), None)];
        let dominant = dominant_category(&records);
        assert_eq!(dominant.category.as_deref(), Some("Refund"));
        assert_eq!(dominant.total, -5.0);
    }

    #[test]
    fn dominant_category_of_nothing_is_absent() {
        assert_eq!(dominant_category(&[]), DominantCategory { category: None, total: 0.0 });
    }

    #[test]
    fn current_period_total_matches_year_and_month() {
        let records = vec![
            spent(10.0, None, Some(day(2025, 2, 1))),
            spent(20.0, None, Some(day(2024, 2, 1))),
            spent(30.0, None, Some(day(2025, 2, 28))),
            spent(40.0, None, None),
        ];
        assert_eq!(current_period_total(&records, day(2025, 2, 14)), 40.0);
    }
}
