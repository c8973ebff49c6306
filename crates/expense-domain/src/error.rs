use thiserror::Error;

/// Validation failures raised by domain constructors and `validate` methods.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Budget(String),
}
