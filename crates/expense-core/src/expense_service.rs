use chrono::NaiveDate;
use expense_domain::{next_id, Expense};
use rust_decimal::Decimal;

use crate::{CategoryCatalog, CoreError, PeriodScope};

/// Input for recording a new expense. The date defaults to today when absent.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: Option<NaiveDate>,
}

impl NewExpense {
    pub fn new(description: impl Into<String>, amount: Decimal, category: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            date: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Restricts expense listings by period and category.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub scope: PeriodScope,
    pub category: Option<String>,
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        self.scope.matches(expense.date)
            && self
                .category
                .as_deref()
                .map_or(true, |category| expense.is_in_category(category))
    }
}

/// Stateless operations over the in-memory expense list.
pub struct ExpenseService;

impl ExpenseService {
    /// Validates and appends a new expense, returning the stored record.
    pub fn add(
        expenses: &mut Vec<Expense>,
        input: NewExpense,
        today: NaiveDate,
        catalog: &CategoryCatalog,
    ) -> Result<Expense, CoreError> {
        let category = catalog.resolve(&input.category)?;
        let expense = Expense::new(
            next_id(expenses),
            input.date.unwrap_or(today),
            input.description,
            input.amount,
            &category,
        )?;
        expenses.push(expense.clone());
        Ok(expense)
    }

    /// Removes the expense with `id`. The list is untouched when the id is unknown.
    pub fn delete(expenses: &mut Vec<Expense>, id: u64) -> Result<Expense, CoreError> {
        let index = expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(CoreError::ExpenseNotFound(id))?;
        Ok(expenses.remove(index))
    }

    /// Expenses matching `filter`, ordered by date then id.
    pub fn filter(expenses: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
        let mut matched: Vec<Expense> = expenses
            .iter()
            .filter(|expense| filter.matches(expense))
            .cloned()
            .collect();
        matched.sort_by_key(|expense| (expense.date, expense.id));
        matched
    }
}
