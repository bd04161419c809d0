//! Presentation of server-authoritative monthly totals.
//!
//! Kept apart from [`crate::current_period_total`]; the server figure is shown as-is and never
//! recomputed locally.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{StoreError, SummaryService};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SummaryDisplay {
    NotLoaded,
    Loaded(f64),
}

impl SummaryDisplay {
    pub fn value(&self) -> Option<f64> {
        match self {
            SummaryDisplay::Loaded(total) => Some(*total),
            SummaryDisplay::NotLoaded => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, SummaryDisplay::Loaded(_))
    }
}

impl fmt::Display for SummaryDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryDisplay::NotLoaded => f.write_str("Loading..."),
            SummaryDisplay::Loaded(total) => write!(f, "{total:.2}"),
        }
    }
}

/// Maps a server total, absent until the request completes, to what the widget shows.
pub fn reconcile_summary(server_total: Option<f64>) -> SummaryDisplay {
    match server_total {
        Some(total) => SummaryDisplay::Loaded(total),
        None => SummaryDisplay::NotLoaded,
    }
}

/// Asks `service` for a month's total; a failed request leaves the widget not loaded.
///
/// The error is handed back alongside the display state so the caller can decide how to report it.
pub fn fetch_summary(
    service: &dyn SummaryService,
    year: i32,
    month: u32,
) -> (SummaryDisplay, Option<StoreError>) {
    match service.monthly_total(year, month) {
        Ok(total) => (reconcile_summary(Some(total)), None),
        Err(err) => (reconcile_summary(None), Some(err)),
    }
}
