use expense_domain::{Budget, Expense};

use crate::CoreError;

/// Abstraction over persistence backends holding the expense and budget documents.
///
/// Implementations read and write each document as a whole.
pub trait ExpenseStorage: Send + Sync {
    fn load_expenses(&self) -> Result<Vec<Expense>, CoreError>;
    fn save_expenses(&self, expenses: &[Expense]) -> Result<(), CoreError>;
    fn load_budgets(&self) -> Result<Vec<Budget>, CoreError>;
    fn save_budgets(&self, budgets: &[Budget]) -> Result<(), CoreError>;
}
