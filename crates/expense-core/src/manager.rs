use expense_domain::{Budget, Expense, MonthPeriod};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::{
    BudgetService, BudgetWarning, CategoryCatalog, Clock, CoreError, ExpenseFilter,
    ExpenseService, ExpenseStorage, MonthlyReport, NewExpense, PeriodScope, SummaryService,
};

/// Result of recording an expense: its assigned id plus any budget warnings it triggered.
#[derive(Debug, Clone)]
pub struct AddOutcome {
    pub expense: Expense,
    pub warnings: Vec<BudgetWarning>,
}

impl AddOutcome {
    pub fn id(&self) -> u64 {
        self.expense.id
    }
}

/// Facade that loads the stored documents, applies one service operation and writes back.
pub struct ExpenseManager {
    storage: Box<dyn ExpenseStorage>,
    clock: Box<dyn Clock>,
    catalog: CategoryCatalog,
}

impl ExpenseManager {
    pub fn new(
        storage: Box<dyn ExpenseStorage>,
        clock: Box<dyn Clock>,
        catalog: CategoryCatalog,
    ) -> Self {
        Self {
            storage,
            clock,
            catalog,
        }
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn add_expense(&self, input: NewExpense) -> Result<AddOutcome, CoreError> {
        // Both documents are read before anything is written.
        let mut expenses = self.storage.load_expenses()?;
        let budgets = self.storage.load_budgets()?;
        let expense =
            ExpenseService::add(&mut expenses, input, self.clock.today(), &self.catalog)?;
        self.storage.save_expenses(&expenses)?;
        info!(id = expense.id, category = %expense.category, "expense recorded");

        let warnings = match BudgetService::find(&budgets, MonthPeriod::of(expense.date)) {
            Some(budget) => BudgetService::warnings_for(budget, &expenses, &expense.category),
            None => {
                debug!(date = %expense.date, "no budget for expense month");
                Vec::new()
            }
        };
        for warning in &warnings {
            warn!(overage = %warning.overage(), "{warning}");
        }
        Ok(AddOutcome { expense, warnings })
    }

    pub fn delete_expense(&self, id: u64) -> Result<Expense, CoreError> {
        let mut expenses = self.storage.load_expenses()?;
        let removed = ExpenseService::delete(&mut expenses, id)?;
        self.storage.save_expenses(&expenses)?;
        info!(id, "expense deleted");
        Ok(removed)
    }

    pub fn list_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, CoreError> {
        let expenses = self.storage.load_expenses()?;
        Ok(ExpenseService::filter(&expenses, filter))
    }

    /// Every stored expense in id order.
    pub fn all_expenses(&self) -> Result<Vec<Expense>, CoreError> {
        let mut expenses = self.storage.load_expenses()?;
        expenses.sort_by_key(|expense| expense.id);
        Ok(expenses)
    }

    pub fn set_budget(&self, budget: Budget) -> Result<(), CoreError> {
        let mut budgets = self.storage.load_budgets()?;
        let period = budget.period();
        let replaced = BudgetService::upsert(&mut budgets, budget, &self.catalog)?;
        self.storage.save_budgets(&budgets)?;
        info!(%period, replaced, "budget stored");
        Ok(())
    }

    pub fn budget_for(&self, period: MonthPeriod) -> Result<Option<Budget>, CoreError> {
        let budgets = self.storage.load_budgets()?;
        Ok(BudgetService::find(&budgets, period).cloned())
    }

    pub fn remove_budget(&self, period: MonthPeriod) -> Result<Budget, CoreError> {
        let mut budgets = self.storage.load_budgets()?;
        let removed = BudgetService::remove(&mut budgets, period)?;
        self.storage.save_budgets(&budgets)?;
        info!(%period, "budget removed");
        Ok(removed)
    }

    pub fn category_summary(&self, category: &str, scope: PeriodScope) -> Result<Decimal, CoreError> {
        let expenses = self.storage.load_expenses()?;
        Ok(SummaryService::category_total(&expenses, category, scope))
    }

    pub fn monthly_report(&self, period: MonthPeriod) -> Result<MonthlyReport, CoreError> {
        let expenses = self.storage.load_expenses()?;
        let budgets = self.storage.load_budgets()?;
        Ok(SummaryService::monthly_report(
            &expenses,
            BudgetService::find(&budgets, period),
            period,
        ))
    }
}
