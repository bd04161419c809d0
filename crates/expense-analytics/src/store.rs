//! Collaborator contracts. The engine consumes these; it never implements transport or persistence.

use expense_domain::{CategorySet, Expense, ExpenseDraft, ExpenseId};

use crate::StoreError;

/// Authoritative source of expense records.
pub trait ExpenseStore: Send + Sync {
    /// Returns every record. Transport failures surface as [`StoreError::Unavailable`].
    fn list(&self) -> Result<Vec<Expense>, StoreError>;
    fn add(&self, draft: ExpenseDraft) -> Result<Expense, StoreError>;
    fn update(&self, id: &ExpenseId, draft: ExpenseDraft) -> Result<Expense, StoreError>;
    fn delete(&self, id: &ExpenseId) -> Result<(), StoreError>;
}

/// Persists the user's category list.
pub trait CategoryStore: Send + Sync {
    fn load(&self) -> Result<CategorySet, StoreError>;
    fn save(&self, categories: &CategorySet) -> Result<(), StoreError>;
}

/// Server-authoritative monthly totals.
///
/// Inclusion rules here may differ from [`crate::current_period_total`]; the two are never
/// substituted for each other.
pub trait SummaryService: Send + Sync {
    fn monthly_total(&self, year: i32, month: u32) -> Result<f64, StoreError>;
}
