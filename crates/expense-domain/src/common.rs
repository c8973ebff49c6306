//! Shared traits and calendar helpers for expense records.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Exposes the stable integer identifier assigned by the store.
pub trait Identifiable {
    fn id(&self) -> u64;
}

/// Supplies a common contract for retrieving monetary amounts.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}

/// Sums the amounts of every entry in `items`.
pub fn total_amount<'a, T, I>(items: I) -> Decimal
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(Amounted::amount).sum()
}

/// Returns the identifier that follows the highest one in use (1 for an empty set).
pub fn next_id<T: Identifiable>(items: &[T]) -> u64 {
    items.iter().map(Identifiable::id).max().unwrap_or(0) + 1
}

/// Canonical form used for category comparisons and storage.
pub fn normalize_category(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A calendar month in a given year, the granularity budgets are set at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthPeriod {
    pub year: i32,
    pub month: u32,
}

impl MonthPeriod {
    pub fn new(month: u32, year: i32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::Budget("Invalid month".into()));
        }
        Ok(Self { year, month })
    }

    /// Period containing the supplied date.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_period_rejects_out_of_range_months() {
        assert!(MonthPeriod::new(0, 2024).is_err());
        assert!(MonthPeriod::new(13, 2024).is_err());
        assert_eq!(MonthPeriod::new(12, 2024).unwrap().to_string(), "12/2024");
    }

    #[test]
    fn month_period_contains_only_its_own_days() {
        let period = MonthPeriod::new(2, 2024).unwrap();
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()));
    }

    #[test]
    fn categories_are_trimmed_and_lowercased() {
        assert_eq!(normalize_category("  Groceries "), "groceries");
    }
}
