use expense_analytics::{AnalyticsError, StoreError};
use expense_config::ConfigError;
use thiserror::Error;

/// Error type surfaced by the session, export and CLI layers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("No expenses to export")]
    EmptyExport,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
