//! Budget bookkeeping and the over-budget checks run after each new expense.

use std::fmt;

use expense_domain::{normalize_category, total_amount, Budget, Expense, MonthPeriod};
use rust_decimal::Decimal;

use crate::{CategoryCatalog, CoreError};

/// Raised when spending in a budget period goes past a configured cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetWarning {
    CategoryLimitExceeded {
        category: String,
        period: MonthPeriod,
        spent: Decimal,
        limit: Decimal,
    },
    MonthlyBudgetExceeded {
        period: MonthPeriod,
        spent: Decimal,
        budget: Decimal,
    },
}

impl BudgetWarning {
    /// How far spending is past the cap.
    pub fn overage(&self) -> Decimal {
        match self {
            BudgetWarning::CategoryLimitExceeded { spent, limit, .. } => *spent - *limit,
            BudgetWarning::MonthlyBudgetExceeded { spent, budget, .. } => *spent - *budget,
        }
    }
}

impl fmt::Display for BudgetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetWarning::CategoryLimitExceeded {
                category,
                period,
                spent,
                limit,
            } => write!(
                f,
                "Category '{category}' is over its budget limit for {period}: spent {:.2} of {:.2}",
                spent, limit
            ),
            BudgetWarning::MonthlyBudgetExceeded {
                period,
                spent,
                budget,
            } => write!(
                f,
                "Monthly budget for {period} exceeded: spent {:.2} of {:.2}",
                spent, budget
            ),
        }
    }
}

/// Stateless operations over the in-memory budget list.
pub struct BudgetService;

impl BudgetService {
    /// Stores `budget`, replacing any budget for the same month. Returns `true` on replacement.
    pub fn upsert(
        budgets: &mut Vec<Budget>,
        budget: Budget,
        catalog: &CategoryCatalog,
    ) -> Result<bool, CoreError> {
        budget.validate()?;
        if let Some(limits) = &budget.category_limits {
            catalog.check_limits(limits)?;
        }
        let period = budget.period();
        if let Some(existing) = budgets.iter_mut().find(|existing| existing.covers(period)) {
            *existing = budget;
            return Ok(true);
        }
        budgets.push(budget);
        budgets.sort_by_key(Budget::period);
        Ok(false)
    }

    pub fn find(budgets: &[Budget], period: MonthPeriod) -> Option<&Budget> {
        budgets.iter().find(|budget| budget.covers(period))
    }

    pub fn remove(budgets: &mut Vec<Budget>, period: MonthPeriod) -> Result<Budget, CoreError> {
        let index = budgets
            .iter()
            .position(|budget| budget.covers(period))
            .ok_or(CoreError::BudgetNotFound(period))?;
        Ok(budgets.remove(index))
    }

    /// Compares spending in the budget's month against its caps.
    ///
    /// `category` selects which category limit to check; the monthly total is always checked.
    /// Spending equal to a cap is not a warning.
    pub fn warnings_for(budget: &Budget, expenses: &[Expense], category: &str) -> Vec<BudgetWarning> {
        let period = budget.period();
        let in_period: Vec<&Expense> = expenses
            .iter()
            .filter(|expense| period.contains(expense.date))
            .collect();

        let mut warnings = Vec::new();
        if let Some(limit) = budget.limit_for(category) {
            let spent = total_amount(
                in_period
                    .iter()
                    .copied()
                    .filter(|expense| expense.is_in_category(category)),
            );
            if spent > limit {
                warnings.push(BudgetWarning::CategoryLimitExceeded {
                    category: normalize_category(category),
                    period,
                    spent,
                    limit,
                });
            }
        }

        let spent = total_amount(in_period.iter().copied());
        if spent > budget.amount {
            warnings.push(BudgetWarning::MonthlyBudgetExceeded {
                period,
                spent,
                budget: budget.amount,
            });
        }
        warnings
    }
}
