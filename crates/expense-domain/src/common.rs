//! Shared traits, calendar-month utilities, and numeric coercion for expense records.

use std::fmt;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::expense::ExpenseId;

/// Exposes a stable identifier for records held by a store.
pub trait Identifiable {
    fn id(&self) -> &ExpenseId;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
///
/// Implementors return the raw stored value; summing code is expected to pass it
/// through [`coerce_amount`] first.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Replaces non-finite amounts (`NaN`, infinities) with `0.0`.
pub fn coerce_amount(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Sums amounts with every term coerced, so malformed values contribute nothing.
pub fn sum_amounts<'a, T, I>(items: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|item| coerce_amount(item.amount()))
        .sum()
}

/// A calendar month, the unit used by trend buckets and period totals.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
}

impl MonthKey {
    /// Builds a key, rejecting month numbers outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of<D: Datelike>(value: &D) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
        }
    }

    /// Moves the key by `months` calendar months (negative moves backwards).
    pub fn shift(self, months: i32) -> Self {
        let index = self.index() + months;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Returns `true` when `value` falls inside this calendar month.
    pub fn contains<D: Datelike>(self, value: &D) -> bool {
        value.year() == self.year && value.month() == self.month
    }

    /// Display label in `<month>/<year>` form, e.g. `2/2025`.
    pub fn label(self) -> String {
        format!("{}/{}", self.month, self.year)
    }

    fn index(self) -> i32 {
        self.year * 12 + self.month as i32 - 1
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}
