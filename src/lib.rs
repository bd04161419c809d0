#![doc(test(attr(deny(warnings))))]

//! Expense Core ties the expense analytics engine to storage, configuration and the
//! `expense_report` command line: category sessions, dashboard composition, CSV export and
//! SVG rendering of chart geometry.

pub mod cli;
pub mod dashboard;
pub mod errors;
pub mod export;
pub mod session;
pub mod svg;
pub mod utils;

pub use dashboard::{Dashboard, DashboardRequest, Summaries};
pub use errors::AppError;
pub use session::CategorySession;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Expense Core tracing initialized.");
    });
}
