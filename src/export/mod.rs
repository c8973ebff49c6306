//! Flat CSV export of the expense store.

use std::{io, path::Path};

use chrono::NaiveDate;
use csv::WriterBuilder;
use expense_domain::Expense;
use serde::Serialize;
use tracing::info;

use crate::errors::{Result, TrackerError};

/// Column order of every export.
pub const CSV_HEADERS: [&str; 5] = ["id", "date", "description", "amount", "category"];

#[derive(Serialize)]
struct ExpenseRow<'a> {
    id: u64,
    date: NaiveDate,
    description: &'a str,
    amount: String,
    category: &'a str,
}

impl<'a> From<&'a Expense> for ExpenseRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id,
            date: expense.date,
            description: &expense.description,
            amount: format!("{:.2}", expense.amount.round_dp(2)),
            category: &expense.category,
        }
    }
}

/// Writes a header row and one row per expense, in id order. Returns the row count.
pub fn write_expenses<W: io::Write>(expenses: &[Expense], writer: W) -> Result<usize> {
    let mut ordered: Vec<&Expense> = expenses.iter().collect();
    ordered.sort_by_key(|expense| expense.id);

    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(CSV_HEADERS)?;
    for expense in &ordered {
        csv.serialize(ExpenseRow::from(*expense))?;
    }
    csv.flush()
        .map_err(|err| TrackerError::Export(err.to_string()))?;
    Ok(ordered.len())
}

/// Exports `expenses` to a CSV file at `path`, replacing any existing file.
pub fn export_expenses(expenses: &[Expense], path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path).map_err(|err| {
        TrackerError::Export(format!("cannot create {}: {err}", path.display()))
    })?;
    let rows = write_expenses(expenses, file)?;
    info!(rows, path = %path.display(), "expenses exported");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn expense(id: u64, day: u32, description: &str, amount: rust_decimal::Decimal) -> Expense {
        Expense::new(
            id,
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            description,
            amount,
            "groceries",
        )
        .unwrap()
    }

    #[test]
    fn rows_follow_header_in_id_order() {
        let expenses = vec![
            expense(2, 9, "Bread, rye", dec!(3)),
            expense(1, 5, "Milk", dec!(4.5)),
        ];
        let mut buffer = Vec::new();
        let rows = write_expenses(&expenses, &mut buffer).unwrap();
        assert_eq!(rows, 2);

        let output = String::from_utf8(buffer).unwrap();
        insta::assert_snapshot!(output, @r###"
        id,date,description,amount,category
        1,2024-01-05,Milk,4.50,groceries
        2,2024-01-09,"Bread, rye",3.00,groceries
        "###);
    }

    #[test]
    fn empty_store_still_writes_header() {
        let mut buffer = Vec::new();
        assert_eq!(write_expenses(&[], &mut buffer).unwrap(), 0);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "id,date,description,amount,category\n"
        );
    }

    #[test]
    fn export_to_missing_directory_is_an_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let err = export_expenses(&[], &path).unwrap_err();
        assert!(matches!(err, TrackerError::Export(_)));
    }
}
