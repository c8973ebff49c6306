use std::collections::BTreeMap;

use expense_domain::{total_amount, Budget, Expense, MonthPeriod};
use rust_decimal::Decimal;

use crate::PeriodScope;

/// Spending for one category within a reported month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLine {
    pub category: String,
    pub spent: Decimal,
    pub limit: Option<Decimal>,
}

impl CategoryLine {
    pub fn exceeded(&self) -> bool {
        self.limit.is_some_and(|limit| self.spent > limit)
    }
}

/// Category-wise breakdown of a month, compared against its budget when one is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReport {
    pub period: MonthPeriod,
    pub lines: Vec<CategoryLine>,
    pub total: Decimal,
    pub expense_count: usize,
    pub budget: Option<Decimal>,
}

impl MonthlyReport {
    pub fn remaining(&self) -> Option<Decimal> {
        self.budget.map(|budget| budget - self.total)
    }

    pub fn over_budget(&self) -> bool {
        self.budget.is_some_and(|budget| self.total > budget)
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Total spent in `category` within `scope`.
    pub fn category_total(expenses: &[Expense], category: &str, scope: PeriodScope) -> Decimal {
        total_amount(
            expenses
                .iter()
                .filter(|expense| scope.matches(expense.date) && expense.is_in_category(category)),
        )
    }

    /// Totals per category within `scope`, keyed by category name.
    pub fn totals_by_category(expenses: &[Expense], scope: PeriodScope) -> BTreeMap<String, Decimal> {
        let mut totals = BTreeMap::new();
        for expense in expenses.iter().filter(|expense| scope.matches(expense.date)) {
            *totals
                .entry(expense.category.clone())
                .or_insert(Decimal::ZERO) += expense.amount;
        }
        totals
    }

    /// Builds the month report. Categories with a limit but no spending are listed with zero.
    pub fn monthly_report(
        expenses: &[Expense],
        budget: Option<&Budget>,
        period: MonthPeriod,
    ) -> MonthlyReport {
        let scope = PeriodScope::Month(period);
        let mut totals = Self::totals_by_category(expenses, scope);
        if let Some(limits) = budget.and_then(|budget| budget.category_limits.as_ref()) {
            for category in limits.keys() {
                totals.entry(category.clone()).or_insert(Decimal::ZERO);
            }
        }

        let lines = totals
            .into_iter()
            .map(|(category, spent)| CategoryLine {
                limit: budget.and_then(|budget| budget.limit_for(&category)),
                category,
                spent,
            })
            .collect::<Vec<_>>();

        MonthlyReport {
            period,
            total: lines.iter().map(|line| line.spent).sum(),
            expense_count: expenses
                .iter()
                .filter(|expense| scope.matches(expense.date))
                .count(),
            budget: budget.map(|budget| budget.amount),
            lines,
        }
    }
}
