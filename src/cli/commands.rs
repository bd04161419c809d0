//! Command handlers behind the `expense_report` subcommands.

use std::{fs, io::Write, path::PathBuf, sync::Arc};

use chrono::NaiveDate;
use expense_analytics::{fetch_summary, Clock, ExpenseStore, FixedClock, StoreError, SystemClock};
use expense_config::{Config, ConfigManager};
use expense_domain::{ExpenseDraft, ExpenseId, FilterCriteria, MonthKey};
use expense_storage_json::{JsonCategoryStore, JsonExpenseStore, StoragePaths};
use serde::Serialize;

use super::{output, CategoryAction, ChartKind, Cli, Commands, ListArgs};
use crate::{
    dashboard::{Dashboard, DashboardRequest, Summaries},
    errors::AppError,
    export::write_csv,
    session::CategorySession,
    svg::{render_line, render_pie},
    utils::format_amount,
};

/// Resolved configuration and storage locations for one invocation.
pub struct CommandContext {
    pub config: Config,
    pub paths: StoragePaths,
    pub clock: Arc<dyn Clock>,
}

impl CommandContext {
    pub fn resolve(cli: &Cli) -> Result<Self, AppError> {
        let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
        let config = ConfigManager::new(config_path).load()?;
        let data_dir: PathBuf = cli
            .data_dir
            .clone()
            .unwrap_or_else(|| config.resolve_data_dir());
        tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");
        Ok(Self {
            paths: StoragePaths::in_dir(&data_dir),
            config,
            clock: Arc::new(SystemClock),
        })
    }

    fn expenses(&self) -> JsonExpenseStore {
        JsonExpenseStore::with_clock(self.paths.expenses.clone(), self.clock.clone())
    }

    fn categories(&self) -> JsonCategoryStore {
        JsonCategoryStore::new(self.paths.categories.clone())
    }

    fn symbol(&self) -> &str {
        &self.config.currency_symbol
    }
}

/// Runs `cli` with a context resolved from its flags.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<(), AppError> {
    let context = CommandContext::resolve(&cli)?;
    if cli.no_color || !context.config.ui_color_enabled {
        colored::control::set_override(false);
    }
    execute(cli.command, &context, out)
}

pub fn execute(
    command: Commands,
    context: &CommandContext,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    match command {
        Commands::List(args) => list(args, context, out),
        Commands::Summary {
            reference,
            window,
            json,
        } => summary(reference, window, json, context, out),
        Commands::Chart {
            kind,
            out: path,
            reference,
        } => chart(kind, path, reference, context, out),
        Commands::Add {
            title,
            amount,
            category,
            date,
        } => add(ExpenseDraft::new(title, amount, category), date, context, out),
        Commands::Edit {
            id,
            title,
            amount,
            category,
        } => edit(ExpenseId::new(id), title, amount, category, context, out),
        Commands::Delete { id } => {
            context.expenses().delete(&ExpenseId::new(id.clone()))?;
            writeln!(out, "Deleted expense {id}")?;
            Ok(())
        }
        Commands::Categories { action } => categories(action, context, out),
        Commands::Export { out: path } => export(path, context, out),
    }
}

fn list(args: ListArgs, context: &CommandContext, out: &mut dyn Write) -> Result<(), AppError> {
    let records = context.expenses().list()?;
    let mut criteria = FilterCriteria::new()
        .search(args.search)
        .for_days(args.from, args.to);
    criteria.category = args.category;

    let request = DashboardRequest {
        criteria,
        page: args.page,
        page_size: args.page_size.unwrap_or(context.config.page_size),
        ..DashboardRequest::from_config(&context.config)
    };
    let dashboard = Dashboard::build(&records, &request, context.clock.as_ref())?;
    write!(out, "{}", output::render_page(&dashboard.page, context.symbol()))?;
    Ok(())
}

fn summary(
    reference: Option<NaiveDate>,
    window: Option<u16>,
    json: bool,
    context: &CommandContext,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let store = context.expenses();
    let records = store.list()?;
    let mut request = DashboardRequest::from_config(&context.config);
    request.reference = reference;
    if let Some(window) = window {
        request.trend_window = usize::from(window);
    }
    let summaries = Summaries::build(&records, &request, context.clock.as_ref());

    let period = MonthKey::of(&summaries.reference);
    let (server_total, err) = fetch_summary(&store, period.year, period.month);
    if let Some(err) = err {
        tracing::warn!(%err, "monthly total unavailable");
    }

    if json {
        let report = SummaryReport {
            summaries: &summaries,
            reported_monthly_total: server_total.value(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }
    write!(
        out,
        "{}",
        output::render_summary(&summaries, server_total, context.symbol())
    )?;
    Ok(())
}

/// JSON shape of `summary --json`.
#[derive(Serialize)]
struct SummaryReport<'a> {
    #[serde(flatten)]
    summaries: &'a Summaries,
    reported_monthly_total: Option<f64>,
}

fn chart(
    kind: ChartKind,
    path: PathBuf,
    reference: Option<NaiveDate>,
    context: &CommandContext,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let records = context.expenses().list()?;
    let mut request = DashboardRequest::from_config(&context.config);
    request.reference = reference;
    let summaries = Summaries::build(&records, &request, context.clock.as_ref());

    let document = match kind {
        ChartKind::Line => render_line(&summaries.line_chart, &request.line_layout),
        ChartKind::Pie => render_pie(&summaries.pie_chart, request.pie_size),
    };
    fs::write(&path, document)?;
    writeln!(out, "Wrote {kind:?} chart to {}", path.display())?;
    Ok(())
}

fn add(
    draft: ExpenseDraft,
    date: Option<NaiveDate>,
    context: &CommandContext,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    if draft.title.trim().is_empty() {
        return Err(AppError::InvalidInput("title must not be empty".into()));
    }
    let store = match date {
        Some(day) => JsonExpenseStore::with_clock(
            context.paths.expenses.clone(),
            Arc::new(FixedClock::on(day)),
        ),
        None => context.expenses(),
    };
    let expense = store.add(draft)?;
    writeln!(
        out,
        "Added {} ({}) as {}",
        expense.title,
        format_amount(context.symbol(), expense.amount_value()),
        expense.id
    )?;
    Ok(())
}

fn edit(
    id: ExpenseId,
    title: Option<String>,
    amount: Option<f64>,
    category: Option<String>,
    context: &CommandContext,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    if title.as_deref().is_some_and(|title| title.trim().is_empty()) {
        return Err(AppError::InvalidInput("title must not be empty".into()));
    }
    let store = context.expenses();
    let current = store
        .list()?
        .into_iter()
        .find(|record| record.id == id)
        .ok_or_else(|| StoreError::NotFound(id.clone()))?;

    let draft = ExpenseDraft::new(
        title.unwrap_or(current.title),
        amount.unwrap_or(current.amount),
        match category {
            Some(label) if label.trim().is_empty() => None,
            Some(label) => Some(label),
            None => current.category,
        },
    );
    let updated = store.update(&id, draft)?;
    writeln!(
        out,
        "Updated {} ({}) as {}",
        updated.title,
        format_amount(context.symbol(), updated.amount_value()),
        updated.id
    )?;
    Ok(())
}

fn categories(
    action: CategoryAction,
    context: &CommandContext,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let mut session = CategorySession::open(context.categories())?;
    match action {
        CategoryAction::List => write!(out, "{}", output::render_categories(session.categories()))?,
        CategoryAction::Add { label } => {
            if session.add(&label)? {
                writeln!(out, "Added category {}", label.trim())?;
            } else {
                writeln!(out, "Category {} already exists or is blank", label.trim())?;
            }
        }
        CategoryAction::Remove { label } => {
            if session.remove(&label)? {
                writeln!(out, "Removed category {}", label.trim())?;
            } else {
                writeln!(out, "Category {} is not a custom category", label.trim())?;
            }
        }
    }
    Ok(())
}

fn export(path: PathBuf, context: &CommandContext, out: &mut dyn Write) -> Result<(), AppError> {
    let records = context.expenses().list()?;
    if records.is_empty() {
        return Err(AppError::EmptyExport);
    }
    let file = fs::File::create(&path)?;
    write_csv(&records, file)?;
    writeln!(out, "Exported {} expenses to {}", records.len(), path.display())?;
    Ok(())
}
