//! Derived report rows: list pages, trend buckets and category totals.

use serde::{Deserialize, Serialize};

use crate::common::MonthKey;

/// One slice of a record sequence.
///
/// `page_number` is always at least 1; an out-of-range page carries no items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    /// Length of the sequence the page was cut from.
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_items.div_ceil(self.page_size)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }
}

/// Total spent in one calendar month of a trend window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendBucket {
    pub period: MonthKey,
    pub period_label: String,
    pub total: f64,
}

impl TrendBucket {
    pub fn empty(period: MonthKey) -> Self {
        Self {
            period,
            period_label: period.label(),
            total: 0.0,
        }
    }
}

/// Summed amount for one normalized category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// The category with the largest total, or none when there were no records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DominantCategory {
    pub category: Option<String>,
    pub total: f64,
}
