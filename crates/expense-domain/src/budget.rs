//! Monthly spending caps and their optional per-category breakdown.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::{normalize_category, MonthPeriod};
use crate::DomainError;

/// Category name to spending limit, keyed by normalized category.
pub type CategoryLimits = BTreeMap<String, Decimal>;

/// A monthly spending cap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub month: u32,
    pub year: i32,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_limits: Option<CategoryLimits>,
}

impl Budget {
    /// Builds a validated budget. Limit keys are normalized; an empty map is stored as `None`.
    pub fn new(
        month: u32,
        year: i32,
        amount: Decimal,
        category_limits: Option<CategoryLimits>,
    ) -> Result<Self, DomainError> {
        let category_limits = category_limits
            .map(normalize_limits)
            .transpose()?
            .filter(|limits| !limits.is_empty());
        let budget = Self {
            month,
            year,
            amount,
            category_limits,
        };
        budget.validate()?;
        Ok(budget)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        MonthPeriod::new(self.month, self.year)?;
        if self.amount <= Decimal::ZERO {
            return Err(DomainError::Budget(
                "Budget amount must be greater than 0".into(),
            ));
        }
        if let Some(limits) = &self.category_limits {
            if let Some((category, _)) = limits.iter().find(|(_, limit)| **limit <= Decimal::ZERO) {
                return Err(DomainError::Budget(format!(
                    "Category limit for '{category}' must be greater than 0"
                )));
            }
            let allocated: Decimal = limits.values().copied().sum();
            if allocated > self.amount {
                return Err(DomainError::Budget(
                    "Sum of category budgets exceeds total budget".into(),
                ));
            }
        }
        Ok(())
    }

    pub fn period(&self) -> MonthPeriod {
        MonthPeriod {
            year: self.year,
            month: self.month,
        }
    }

    pub fn covers(&self, period: MonthPeriod) -> bool {
        self.period() == period
    }

    /// Limit configured for `category`, if any.
    pub fn limit_for(&self, category: &str) -> Option<Decimal> {
        self.category_limits
            .as_ref()
            .and_then(|limits| limits.get(&normalize_category(category)).copied())
    }

    /// Portion of the budget not assigned to any category limit.
    pub fn unallocated(&self) -> Decimal {
        let allocated: Decimal = self
            .category_limits
            .iter()
            .flat_map(|limits| limits.values())
            .copied()
            .sum();
        self.amount - allocated
    }
}

/// Re-keys limits by normalized category. Keys that collapse onto the same category are rejected.
fn normalize_limits(limits: CategoryLimits) -> Result<CategoryLimits, DomainError> {
    let mut normalized = CategoryLimits::new();
    for (category, limit) in limits {
        let category = normalize_category(&category);
        if normalized.insert(category.clone(), limit).is_some() {
            return Err(DomainError::Budget(format!(
                "Duplicate category limit for '{category}'"
            )));
        }
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn limits(pairs: &[(&str, Decimal)]) -> CategoryLimits {
        pairs
            .iter()
            .map(|(name, amount)| (name.to_string(), *amount))
            .collect()
    }

    #[test]
    fn valid_budget_with_category_limits() {
        let budget = Budget::new(
            1,
            2024,
            dec!(1000.00),
            Some(limits(&[("Groceries", dec!(500.00))])),
        )
        .unwrap();
        assert_eq!(budget.month, 1);
        assert_eq!(budget.amount, dec!(1000.00));
        assert_eq!(budget.limit_for("groceries"), Some(dec!(500.00)));
        assert_eq!(budget.unallocated(), dec!(500.00));
    }

    #[test]
    fn invalid_month_is_rejected() {
        let err = Budget::new(13, 2024, dec!(1000.00), None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid month");
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        let err = Budget::new(1, 2024, dec!(0), None).unwrap_err();
        assert_eq!(err.to_string(), "Budget amount must be greater than 0");
    }

    #[test]
    fn category_limits_may_not_exceed_total() {
        let err = Budget::new(
            1,
            2024,
            dec!(1000.00),
            Some(limits(&[("groceries", dec!(1200.00))])),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Sum of category budgets exceeds total budget"
        );
    }

    #[test]
    fn zero_category_limit_is_rejected() {
        let err = Budget::new(1, 2024, dec!(100), Some(limits(&[("dining", dec!(0))]))).unwrap_err();
        assert!(err.to_string().contains("'dining'"));
    }

    #[test]
    fn limits_differing_only_in_case_are_rejected() {
        let err = Budget::new(
            1,
            2024,
            dec!(100),
            Some(limits(&[("Dining", dec!(10)), ("dining", dec!(20))])),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Duplicate category limit for 'dining'");
    }

    #[test]
    fn empty_limits_are_dropped() {
        let budget = Budget::new(5, 2024, dec!(10), Some(CategoryLimits::new())).unwrap();
        assert!(budget.category_limits.is_none());
        let json = serde_json::to_string(&budget).unwrap();
        assert!(!json.contains("category_limits"));
    }
}
