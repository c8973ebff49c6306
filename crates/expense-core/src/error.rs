use expense_domain::{DomainError, MonthPeriod};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Budget(String),
    #[error("Unknown category '{category}'{}", did_you_mean(.suggestion))]
    UnknownCategory {
        category: String,
        suggestion: Option<String>,
    },
    #[error("Expense with id {0} not found")]
    ExpenseNotFound(u64),
    #[error("No budget set for {0}")]
    BudgetNotFound(MonthPeriod),
    #[error("{0}")]
    Storage(String),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|name| format!(" (did you mean '{name}'?)"))
        .unwrap_or_default()
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(message) => CoreError::Validation(message),
            DomainError::Budget(message) => CoreError::Budget(message),
        }
    }
}
