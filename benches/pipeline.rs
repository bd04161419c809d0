use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use expense_analytics::{category_breakdown, filter_expenses, monthly_trend, FixedClock};
use expense_core::dashboard::{Dashboard, DashboardRequest};
use expense_domain::{Expense, FilterCriteria};

const CATEGORIES: [&str; 5] = ["Food", "Rent", "Travel", "Shopping", "Gym"];

fn sample(count: usize) -> Vec<Expense> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            Expense::new(
                format!("expense {i}"),
                (i % 97) as f64 + 0.5,
                Some(CATEGORIES[i % CATEGORIES.len()].to_string()),
            )
            .with_id(i.to_string().as_str())
            .created_on(start + Duration::days((i % 540) as i64))
        })
        .collect()
}

fn pipeline(c: &mut Criterion) {
    let records = sample(10_000);
    let reference = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let criteria = FilterCriteria::new()
        .search("food")
        .for_days(NaiveDate::from_ymd_opt(2024, 6, 1), Some(reference));

    c.bench_function("filter_10k", |b| {
        b.iter(|| filter_expenses(black_box(&records), black_box(&criteria)))
    });
    c.bench_function("trend_and_breakdown_10k", |b| {
        b.iter(|| {
            let trend = monthly_trend(black_box(&records), 12, reference);
            let breakdown = category_breakdown(black_box(&records));
            (trend, breakdown)
        })
    });

    let request = DashboardRequest {
        criteria,
        reference: Some(reference),
        ..DashboardRequest::default()
    };
    let clock = FixedClock::on(reference);
    c.bench_function("dashboard_10k", |b| {
        b.iter(|| Dashboard::build(black_box(&records), &request, &clock))
    });
}

criterion_group!(benches, pipeline);
criterion_main!(benches);
