//! Domain types representing recorded spending events.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::{normalize_category, Amounted, Identifiable};
use crate::DomainError;

pub const MAX_DESCRIPTION_LEN: usize = 100;

/// A single spending event persisted in the expense store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: u64,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
}

impl Expense {
    /// Builds a validated expense. The category is stored in normalized form.
    pub fn new(
        id: u64,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        category: &str,
    ) -> Result<Self, DomainError> {
        let expense = Self {
            id,
            date,
            description: description.into().trim().to_string(),
            amount,
            category: normalize_category(category),
        };
        expense.validate()?;
        Ok(expense)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.description.trim().is_empty() {
            return Err(DomainError::Validation("Description cannot be empty".into()));
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(DomainError::Validation(format!(
                "Description must be less than {MAX_DESCRIPTION_LEN} characters"
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(DomainError::Validation(
                "Amount must be greater than 0".into(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::Validation("Category is required".into()));
        }
        Ok(())
    }

    pub fn is_in_category(&self, category: &str) -> bool {
        self.category == normalize_category(category)
    }
}

impl Identifiable for Expense {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> Decimal {
        self.amount
    }
}
