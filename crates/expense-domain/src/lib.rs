//! expense-domain
//!
//! Pure domain models (Expense, Budget, category limits, month periods).
//! No I/O, no CLI, no storage. Only data types and their validation rules.

pub mod budget;
pub mod common;
pub mod error;
pub mod expense;

pub use budget::*;
pub use common::*;
pub use error::DomainError;
pub use expense::*;
