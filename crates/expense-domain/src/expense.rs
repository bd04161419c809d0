//! Domain types representing recorded expenses.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::common::{coerce_amount, Amounted, Identifiable, NamedEntity};

/// Label substituted for absent or blank categories during aggregation.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Opaque record identifier, stable for the lifetime of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Allocates a fresh identifier for a locally created record.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for ExpenseId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for ExpenseId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => ExpenseId(text),
            RawId::Signed(value) => ExpenseId(value.to_string()),
            RawId::Unsigned(value) => ExpenseId(value.to_string()),
        })
    }
}

/// A single recorded expense.
///
/// Records are values: edits go through [`Expense::apply`], which returns a new record
/// with the editable field set replaced and the identity fields preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        default,
        alias = "createdAt",
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<NaiveDateTime>,
}

impl Expense {
    pub fn new(title: impl Into<String>, amount: f64, category: Option<String>) -> Self {
        Self {
            id: ExpenseId::generate(),
            title: title.into(),
            amount,
            category,
            created_at: None,
        }
    }

    /// Creates a record from a draft, stamping it with `created_at`.
    pub fn from_draft(draft: ExpenseDraft, created_at: Option<NaiveDateTime>) -> Self {
        Self {
            id: ExpenseId::generate(),
            title: draft.title,
            amount: draft.amount,
            category: draft.category,
            created_at,
        }
    }

    pub fn with_id(mut self, id: impl Into<ExpenseId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Stamps the record at midnight of `date`.
    pub fn created_on(self, date: NaiveDate) -> Self {
        self.with_created_at(date.and_time(chrono::NaiveTime::MIN))
    }

    /// Returns a copy with title, amount and category replaced by `draft`.
    pub fn apply(&self, draft: ExpenseDraft) -> Self {
        Self {
            id: self.id.clone(),
            title: draft.title,
            amount: draft.amount,
            category: draft.category,
            created_at: self.created_at,
        }
    }

    /// Category label used for grouping; never mutates the stored value.
    pub fn normalized_category(&self) -> &str {
        normalize_category(self.category.as_deref())
    }

    /// Amount with non-finite values coerced to zero.
    pub fn amount_value(&self) -> f64 {
        coerce_amount(self.amount)
    }

    /// Decimal string form of the amount as used by text search (`100`, `12.5`).
    pub fn amount_text(&self) -> String {
        self.amount_value().to_string()
    }
}

impl Identifiable for Expense {
    fn id(&self) -> &ExpenseId {
        &self.id
    }
}

impl NamedEntity for Expense {
    fn name(&self) -> &str {
        &self.title
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// The editable field set of an expense, as submitted by an entry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub title: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ExpenseDraft {
    pub fn new(title: impl Into<String>, amount: f64, category: Option<String>) -> Self {
        Self {
            title: title.into(),
            amount,
            category,
        }
    }
}

/// Maps absent or blank category labels to [`UNCATEGORIZED`].
pub fn normalize_category(category: Option<&str>) -> &str {
    match category {
        Some(label) if !label.trim().is_empty() => label,
        _ => UNCATEGORIZED,
    }
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<RawAmount>::deserialize(deserializer)? {
        Some(RawAmount::Number(value)) => coerce_amount(value),
        Some(RawAmount::Text(text)) => text.trim().parse().map(coerce_amount).unwrap_or(0.0),
        Some(RawAmount::Other(_)) | None => 0.0,
    })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<RawTimestamp>::deserialize(deserializer)? {
        Some(RawTimestamp::Text(text)) => parse_timestamp(&text),
        Some(RawTimestamp::Other(_)) | None => None,
    })
}

/// Parses RFC 3339, naive ISO date-times, or plain `YYYY-MM-DD` dates.
///
/// Offsets are converted to UTC before dropping them; plain dates map to midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(chrono::NaiveTime::MIN))
}
