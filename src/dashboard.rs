//! Composes the analytics engine into the dashboard view.
//!
//! The list reflects the filtered records; the summary widgets (trend, breakdown, dominant
//! category, current-month total) always reflect every record. Everything is recomputed on
//! each call; nothing is cached between builds.

use chrono::NaiveDate;
use expense_analytics::{
    build_line, build_pie, category_breakdown, current_period_total, dominant_category,
    filter_expenses, monthly_trend, paginate, AnalyticsError, Clock, LineChart, LineLayout,
    PieChart, SeriesPoint, Slice, DEFAULT_TREND_WINDOW,
};
use expense_config::Config;
use expense_domain::{CategoryTotal, DominantCategory, Expense, FilterCriteria, Page, TrendBucket};
use serde::Serialize;

/// Upper bound on trend months, whatever the request or config asks for.
pub const MAX_TREND_WINDOW: usize = 120;

/// Inputs the dashboard is rebuilt from.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRequest {
    pub criteria: FilterCriteria,
    pub page: usize,
    pub page_size: usize,
    pub trend_window: usize,
    /// Month the summary widgets are anchored to; today when absent.
    pub reference: Option<NaiveDate>,
    pub line_layout: LineLayout,
    pub pie_size: f64,
}

impl Default for DashboardRequest {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
            page_size: 10,
            trend_window: DEFAULT_TREND_WINDOW,
            reference: None,
            line_layout: LineLayout::default(),
            pie_size: 200.0,
        }
    }
}

impl DashboardRequest {
    /// Takes page size, trend window and chart dimensions from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            page_size: config.page_size,
            trend_window: config.trend_window,
            line_layout: LineLayout::new(config.line_chart.width, config.line_chart.height)
                .with_padding(config.line_chart.padding),
            pie_size: config.pie_size,
            ..Self::default()
        }
    }
}

/// Summary widgets and chart geometry. These always cover every record and never fail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summaries {
    pub reference: NaiveDate,
    pub trend: Vec<TrendBucket>,
    pub breakdown: Vec<CategoryTotal>,
    pub dominant: DominantCategory,
    pub current_period_total: f64,
    pub line_chart: LineChart,
    pub pie_chart: PieChart,
}

impl Summaries {
    /// Runs aggregation and geometry over `records`. Criteria and paging in `request` are ignored.
    pub fn build(records: &[Expense], request: &DashboardRequest, clock: &dyn Clock) -> Self {
        let reference = request.reference.unwrap_or_else(|| clock.today());
        let window = request.trend_window.min(MAX_TREND_WINDOW);

        let trend = monthly_trend(records, window, reference);
        let breakdown = category_breakdown(records);
        let dominant = dominant_category(records);
        let current_period_total = current_period_total(records, reference);

        let points: Vec<SeriesPoint> = trend.iter().map(SeriesPoint::from).collect();
        let line_chart = build_line(&points, &request.line_layout);
        // Pie slices need positive totals.
        let slices: Vec<Slice> = breakdown
            .iter()
            .filter(|total| total.total > 0.0)
            .map(Slice::from)
            .collect();
        let pie_chart = build_pie(&slices, request.pie_size);

        Self {
            reference,
            trend,
            breakdown,
            dominant,
            current_period_total,
            line_chart,
            pie_chart,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub page: Page<Expense>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub summaries: Summaries,
}

impl Dashboard {
    /// Runs filter and pagination for the list, then [`Summaries::build`] over every record.
    ///
    /// Fails only when the request's page size is zero.
    pub fn build(
        records: &[Expense],
        request: &DashboardRequest,
        clock: &dyn Clock,
    ) -> Result<Self, AnalyticsError> {
        let filtered = filter_expenses(records, &request.criteria);
        let page = paginate(&filtered, request.page, request.page_size)?;
        let summaries = Summaries::build(records, request, clock);

        tracing::debug!(
            total = records.len(),
            filtered = filtered.len(),
            page = page.page_number,
            reference = %summaries.reference,
            "dashboard rebuilt"
        );

        Ok(Self {
            page,
            filtered_count: filtered.len(),
            total_count: records.len(),
            summaries,
        })
    }
}
