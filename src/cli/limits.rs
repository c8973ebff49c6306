use std::str::FromStr;

use expense_domain::{normalize_category, CategoryLimits};
use rust_decimal::Decimal;

use crate::errors::{Result, TrackerError};

const FORMAT_HINT: &str =
    "Invalid category limits format. Use 'category1:amount1,category2:amount2'";

/// Parses `"groceries:500.00,utilities:200"` into a limit map. An empty string yields no limits.
pub fn parse_category_limits(raw: &str) -> Result<CategoryLimits> {
    let mut limits = CategoryLimits::new();
    if raw.trim().is_empty() {
        return Ok(limits);
    }
    for pair in raw.split(',') {
        let parts: Vec<&str> = pair.split(':').collect();
        let [category, amount] = parts.as_slice() else {
            return Err(TrackerError::Validation(FORMAT_HINT.into()));
        };
        let category = normalize_category(category);
        if category.is_empty() {
            return Err(TrackerError::Validation(FORMAT_HINT.into()));
        }
        let amount = Decimal::from_str(amount.trim())
            .map_err(|_| TrackerError::Validation(FORMAT_HINT.into()))?;
        if limits.insert(category.clone(), amount).is_some() {
            return Err(TrackerError::Validation(format!(
                "Duplicate category limit for '{category}'"
            )));
        }
    }
    Ok(limits)
}
