use expense_domain::ExpenseId;
use thiserror::Error;

/// Failures raised by the engine itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Failures raised by record, category and summary collaborators.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Expense not found: {0}")]
    NotFound(ExpenseId),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(String),
}
