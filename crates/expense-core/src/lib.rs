//! expense-core
//!
//! Business logic for the expense tracker: adding and deleting expenses,
//! budget upkeep, spending summaries and over-budget warnings.
//! Depends on expense-domain. No CLI, no terminal I/O, no direct file access.

pub mod budget_service;
pub mod category_service;
pub mod error;
pub mod expense_service;
pub mod manager;
pub mod scope;
pub mod storage;
pub mod summary_service;
pub mod time;

pub use budget_service::*;
pub use category_service::*;
pub use error::CoreError;
pub use expense_service::*;
pub use manager::{AddOutcome, ExpenseManager};
pub use scope::PeriodScope;
pub use storage::ExpenseStorage;
pub use summary_service::*;
pub use time::Clock;
