//! Transient list-view filter inputs.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Search text, inclusive date bounds and an optional exact category.
///
/// Bounds compare against the full timestamp; use [`FilterCriteria::for_days`] when whole-day
/// inclusivity is wanted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn since(mut self, bound: NaiveDateTime) -> Self {
        self.date_from = Some(bound);
        self
    }

    pub fn until(mut self, bound: NaiveDateTime) -> Self {
        self.date_to = Some(bound);
        self
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Applies whole-day bounds: start of `from` through the last instant of `to`.
    pub fn for_days(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from.map(|day| day.and_time(NaiveTime::MIN));
        self.date_to = to.map(end_of_day);
        self
    }

    /// Search query with surrounding whitespace removed, or `None` when blank.
    pub fn query(&self) -> Option<&str> {
        let trimmed = self.search_text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Category filter, or `None` when absent or blank.
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }

    /// `true` when no stage would remove anything.
    pub fn is_empty(&self) -> bool {
        self.query().is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.category_filter().is_none()
    }
}

fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    day.succ_opt()
        .map(|next| next.and_time(NaiveTime::MIN) - chrono::Duration::nanoseconds(1))
        .unwrap_or(NaiveDateTime::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_search_is_absent() {
        let criteria = FilterCriteria::new().search("   \t");
        assert_eq!(criteria.query(), None);
        assert!(criteria.is_empty());
    }

    #[test]
    fn for_days_spans_whole_days() {
        let from = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let criteria = FilterCriteria::new().for_days(Some(from), Some(to));

        assert_eq!(criteria.date_from, from.and_hms_opt(0, 0, 0));
        let upper = criteria.date_to.unwrap();
        assert!(upper > to.and_hms_opt(23, 59, 59).unwrap());
        assert!(upper < NaiveDate::from_ymd_opt(2025, 2, 1).unwrap().and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn blank_category_is_ignored() {
        assert!(FilterCriteria::new().in_category(" ").is_empty());
        assert_eq!(
            FilterCriteria::new().in_category("Food").category_filter(),
            Some("Food")
        );
    }
}
