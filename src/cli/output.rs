//! Text rendering for CLI reports.

use std::fmt::Write;

use colored::Colorize;
use expense_analytics::SummaryDisplay;
use expense_domain::{CategorySet, Expense, NamedEntity, Page};

use crate::{dashboard::Summaries, utils::format_amount};

const BAR_WIDTH: usize = 30;
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn render_page(page: &Page<Expense>, symbol: &str) -> String {
    let mut out = String::new();
    if page.is_empty() {
        let _ = writeln!(out, "{}", "No expenses found.".dimmed());
        return out;
    }

    let first = (page.page_number - 1) * page.page_size + 1;
    let last = first + page.items.len() - 1;
    let _ = writeln!(
        out,
        "{} {}-{} of {} (page {}/{})",
        "Expenses".bold(),
        first,
        last,
        page.total_items,
        page.page_number,
        page.total_pages()
    );
    for expense in &page.items {
        let date = expense
            .created_at
            .map(|created| created.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "----------".into());
        let _ = writeln!(
            out,
            "  {:<12} {} {:<24} {:<14} {:>12}",
            expense.id.as_str(),
            date,
            expense.name(),
            expense.normalized_category(),
            format_amount(symbol, expense.amount_value())
        );
    }
    out
}

pub fn render_summary(
    summaries: &Summaries,
    server_total: SummaryDisplay,
    symbol: &str,
) -> String {
    let mut out = String::new();
    let month = summaries.reference.format("%-m/%Y");

    let _ = writeln!(
        out,
        "{} ({month}): {}",
        "This month".bold(),
        format_amount(symbol, summaries.current_period_total).green()
    );
    let server = match server_total.value() {
        Some(total) => format_amount(symbol, total),
        None => server_total.to_string(),
    };
    let _ = writeln!(out, "{} {server}", "Reported monthly total:".bold());
    match &summaries.dominant.category {
        Some(category) => {
            let _ = writeln!(
                out,
                "{} {category} ({})",
                "Top category:".bold(),
                format_amount(symbol, summaries.dominant.total)
            );
        }
        None => {
            let _ = writeln!(out, "{} {}", "Top category:".bold(), "none".dimmed());
        }
    }

    let _ = writeln!(out, "\n{}", "Monthly trend".bold());
    let peak = summaries
        .trend
        .iter()
        .map(|bucket| bucket.total)
        .fold(0.0_f64, f64::max);
    for bucket in &summaries.trend {
        let _ = writeln!(
            out,
            "  {:>8} {:>12} {}",
            bucket.period_label,
            format_amount(symbol, bucket.total),
            bar(bucket.total, peak).cyan()
        );
    }

    let _ = writeln!(out, "\n{}", "By category".bold());
    if summaries.breakdown.is_empty() {
        let _ = writeln!(out, "  {}", "No data".dimmed());
    }
    let grand_total: f64 = summaries.breakdown.iter().map(|row| row.total).sum();
    for row in &summaries.breakdown {
        let share = if grand_total == 0.0 {
            0.0
        } else {
            row.total / grand_total * 100.0
        };
        let _ = writeln!(
            out,
            "  {:<16} {:>12} {:>6.1}%",
            row.category,
            format_amount(symbol, row.total),
            share
        );
    }
    out
}

pub fn render_categories(categories: &CategorySet) -> String {
    let mut out = String::new();
    for label in categories.presets() {
        let _ = writeln!(out, "  {label}");
    }
    for label in categories.custom() {
        let _ = writeln!(out, "  {label} {}", "(custom)".dimmed());
    }
    out
}

fn bar(value: f64, peak: f64) -> String {
    if peak <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let width = ((value / peak) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(width.max(1))
}
