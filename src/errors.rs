use expense_config::ConfigError;
use expense_core::CoreError;
use thiserror::Error;

/// User-facing error type for the CLI and export layers.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Budget error: {0}")]
    Budget(String),
    #[error("Expense not found: no expense with id {0}")]
    ExpenseNotFound(u64),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Export error: {0}")]
    Export(String),
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl From<CoreError> for TrackerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(_) | CoreError::UnknownCategory { .. } => {
                TrackerError::Validation(err.to_string())
            }
            CoreError::Budget(_) | CoreError::BudgetNotFound(_) => {
                TrackerError::Budget(err.to_string())
            }
            CoreError::ExpenseNotFound(id) => TrackerError::ExpenseNotFound(id),
            CoreError::Storage(message) => TrackerError::Storage(message),
        }
    }
}

impl From<ConfigError> for TrackerError {
    fn from(err: ConfigError) -> Self {
        TrackerError::Config(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        TrackerError::Export(err.to_string())
    }
}
