//! `expense_report` command line.

pub mod commands;
pub mod output;

use std::{io::Write, path::PathBuf};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{dashboard::MAX_TREND_WINDOW, errors::AppError};

/// Top-level CLI parser for the `expense_report` binary.
#[derive(Debug, Parser)]
#[command(
    name = "expense_report",
    version,
    about = "Review personal expenses: filtered lists, monthly trends and category breakdowns"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding expenses.json and categories.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List expenses matching a search, one page at a time
    List(ListArgs),
    /// Show this month's total, the top category and the monthly trend
    Summary {
        /// Anchor month for the summary (YYYY-MM-DD); defaults to today
        #[arg(long)]
        reference: Option<NaiveDate>,
        /// Number of months in the trend
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..=MAX_TREND_WINDOW as i64))]
        window: Option<u16>,
        /// Print the summary widgets as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a chart as an SVG document
    Chart {
        #[arg(value_enum)]
        kind: ChartKind,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        reference: Option<NaiveDate>,
    },
    /// Record a new expense
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        #[arg(long)]
        category: Option<String>,
        /// Date of the expense (YYYY-MM-DD); defaults to now
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Replace the title, amount or category of an existing expense
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,
        /// New category; an empty string clears it
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete an expense by id
    Delete { id: String },
    /// Manage the category list
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Export every expense as CSV
    Export {
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Debug, Args, Default)]
pub struct ListArgs {
    /// Case-insensitive text matched against title, category and amount
    #[arg(long, default_value = "")]
    pub search: String,
    /// Earliest day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Latest day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Overrides the configured page size
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Debug, Subcommand)]
pub enum CategoryAction {
    List,
    Add { label: String },
    Remove { label: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    Line,
    Pie,
}

/// Parses process arguments and runs the selected command against stdout.
pub fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(cli, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{ChartKind, Cli, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "expense_report",
            "list",
            "--search",
            "food",
            "--data-dir",
            "/tmp/expenses",
            "--no-color",
        ])
        .expect("cli should parse");

        assert!(cli.no_color);
        assert_eq!(cli.data_dir.as_deref(), Some(std::path::Path::new("/tmp/expenses")));
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.search, "food");
                assert_eq!(args.page, 1);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn chart_kind_and_dates_parse() {
        let cli = Cli::try_parse_from([
            "expense_report",
            "chart",
            "pie",
            "--out",
            "pie.svg",
            "--reference",
            "2025-02-28",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Chart { kind, reference, .. } => {
                assert_eq!(kind, ChartKind::Pie);
                assert_eq!(reference, chrono::NaiveDate::from_ymd_opt(2025, 2, 28));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn trend_window_is_bounded() {
        assert!(Cli::try_parse_from(["expense_report", "summary", "--window", "3000000000"]).is_err());
        assert!(Cli::try_parse_from(["expense_report", "summary", "--window", "0"]).is_err());
        let cli = Cli::try_parse_from(["expense_report", "summary", "--window", "12", "--json"])
            .expect("cli should parse");
        match cli.command {
            Commands::Summary { window, json, .. } => {
                assert_eq!(window, Some(12));
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn edit_takes_optional_fields() {
        let cli = Cli::try_parse_from(["expense_report", "edit", "7", "--amount", "-4.5"])
            .expect("cli should parse");
        match cli.command {
            Commands::Edit { id, title, amount, category } => {
                assert_eq!(id, "7");
                assert_eq!(title, None);
                assert_eq!(amount, Some(-4.5));
                assert_eq!(category, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert!(Cli::try_parse_from(["expense_report", "list", "--from", "28/02/2025"]).is_err());
    }
}
