use std::fmt;

use chrono::{Datelike, NaiveDate};
use expense_domain::MonthPeriod;

use crate::CoreError;

/// Time restriction applied to summaries and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodScope {
    #[default]
    AllTime,
    Year(i32),
    Month(MonthPeriod),
}

impl PeriodScope {
    /// Builds a scope from optional command-line style parts. A month needs a year.
    pub fn from_parts(month: Option<u32>, year: Option<i32>) -> Result<Self, CoreError> {
        match (month, year) {
            (None, None) => Ok(PeriodScope::AllTime),
            (None, Some(year)) => Ok(PeriodScope::Year(year)),
            (Some(month), Some(year)) => MonthPeriod::new(month, year)
                .map(PeriodScope::Month)
                .map_err(|err| CoreError::Validation(err.to_string())),
            (Some(_), None) => Err(CoreError::Validation(
                "A month filter requires a year".into(),
            )),
        }
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            PeriodScope::AllTime => true,
            PeriodScope::Year(year) => date.year() == *year,
            PeriodScope::Month(period) => period.contains(date),
        }
    }
}

impl fmt::Display for PeriodScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodScope::AllTime => f.write_str("(all time)"),
            PeriodScope::Year(year) => write!(f, "for {year}"),
            PeriodScope::Month(period) => write!(f, "for {period}"),
        }
    }
}
