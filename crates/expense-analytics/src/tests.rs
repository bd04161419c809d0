use chrono::NaiveDate;
use expense_domain::{CategoryTotal, Expense, FilterCriteria};

use crate::{
    build_line, build_pie, category_breakdown, current_period_total, dominant_category,
    filter_expenses, monthly_trend, paginate, LineChart, LineLayout, PieChart, SeriesPoint,
    Slice,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn scenario_records() -> Vec<Expense> {
    vec![
        Expense::new("Groceries", 100.0, Some("Food".into()))
            .with_id("1")
            .created_on(day(2025, 1, 15)),
        Expense::new("Takeaway", 50.0, Some("Food".into()))
            .with_id("2")
            .created_on(day(2025, 2, 10)),
        Expense::new("Deposit", 25.0, Some("Rent".into()))
            .with_id("3")
            .created_on(day(2025, 2, 20)),
    ]
}

#[test]
fn dashboard_scenario_matches_expected_aggregates() {
    let records = scenario_records();
    let reference = day(2025, 2, 28);

    let trend = monthly_trend(&records, 2, reference);
    let buckets: Vec<(&str, f64)> = trend
        .iter()
        .map(|bucket| (bucket.period_label.as_str(), bucket.total))
        .collect();
    assert_eq!(buckets, vec![("1/2025", 100.0), ("2/2025", 75.0)]);

    assert_eq!(
        category_breakdown(&records),
        vec![
            CategoryTotal {
                category: "Food".into(),
                total: 150.0
            },
            CategoryTotal {
                category: "Rent".into(),
                total: 25.0
            },
        ]
    );

    let dominant = dominant_category(&records);
    assert_eq!(dominant.category.as_deref(), Some("Food"));
    assert_eq!(dominant.total, 150.0);

    assert_eq!(current_period_total(&records, reference), 75.0);
}

#[test]
fn aggregates_feed_chart_geometry() {
    let records = scenario_records();
    let trend = monthly_trend(&records, 2, day(2025, 2, 28));
    let points: Vec<SeriesPoint> = trend.iter().map(SeriesPoint::from).collect();

    let LineChart::Plot(line) = build_line(&points, &LineLayout::default()) else {
        panic!("trend should plot");
    };
    assert_eq!(line.line_path.to_svg(), "M 20 20 L 580 180");

    let slices: Vec<Slice> = category_breakdown(&records).iter().map(Slice::from).collect();
    let PieChart::Plot(pie) = build_pie(&slices, 200.0) else {
        panic!("breakdown should plot");
    };
    assert_eq!(pie.total_value, 175.0);
    assert_eq!(pie.arcs[0].label, "Food");
    assert!(pie.arcs[0].large_arc);
    assert!(!pie.arcs[1].large_arc);
}

#[test]
fn filtered_pages_preserve_order() {
    let records = scenario_records();
    let filtered = filter_expenses(&records, &FilterCriteria::new().search("o"));
    let ids: Vec<&str> = filtered.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);

    let second = paginate(&filtered, 2, 2).expect("valid page size");
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].id.as_str(), "3");
}

#[test]
fn recomputation_is_deterministic() {
    let records = scenario_records();
    let reference = day(2025, 2, 28);
    assert_eq!(
        monthly_trend(&records, 6, reference),
        monthly_trend(&records, 6, reference)
    );
    assert_eq!(category_breakdown(&records), category_breakdown(&records));
}
