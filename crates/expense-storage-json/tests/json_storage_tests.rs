use std::fs;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use expense_core::{CategoryCatalog, Clock, CoreError, ExpenseManager, ExpenseStorage, NewExpense};
use expense_domain::{Budget, Expense};
use expense_storage_json::{JsonExpenseStorage, StoragePaths, BUDGETS_FILE, EXPENSES_FILE};
use rust_decimal_macros::dec;
use tempfile::tempdir;

struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap()
    }
}

fn sample_expense(id: u64) -> Expense {
    Expense::new(
        id,
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        "Groceries run",
        dec!(42.10),
        "groceries",
    )
    .expect("valid expense")
}

#[test]
fn opening_storage_creates_empty_documents() {
    let dir = tempdir().expect("tempdir");
    let data_dir = dir.path().join("data");
    JsonExpenseStorage::in_dir(&data_dir).expect("create storage");

    for name in [EXPENSES_FILE, BUDGETS_FILE] {
        let contents = fs::read_to_string(data_dir.join(name)).expect("document exists");
        assert_eq!(contents.trim(), "[]");
    }
}

#[test]
fn json_storage_can_save_and_load_expenses_and_budgets() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonExpenseStorage::in_dir(dir.path()).expect("create storage");

    let expenses = vec![sample_expense(1), sample_expense(2)];
    storage.save_expenses(&expenses).expect("save expenses");
    assert_eq!(storage.load_expenses().expect("load expenses"), expenses);

    let budget = Budget::new(
        3,
        2024,
        dec!(1000.00),
        Some([("groceries".to_string(), dec!(500.00))].into_iter().collect()),
    )
    .expect("valid budget");
    storage
        .save_budgets(std::slice::from_ref(&budget))
        .expect("save budgets");
    assert_eq!(storage.load_budgets().expect("load budgets"), vec![budget]);

    let tmp = storage.paths().expenses_file.with_extension("json.tmp");
    assert!(!tmp.exists(), "temporary file should be renamed away");
}

#[test]
fn reopening_keeps_existing_documents() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonExpenseStorage::in_dir(dir.path()).expect("create storage");
    storage.save_expenses(&[sample_expense(5)]).expect("save");

    let reopened = JsonExpenseStorage::new(StoragePaths::in_dir(dir.path())).expect("reopen");
    let loaded = reopened.load_expenses().expect("load");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 5);
}

#[test]
fn corrupt_document_reports_storage_error() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonExpenseStorage::in_dir(dir.path()).expect("create storage");
    fs::write(&storage.paths().expenses_file, "{ not json").expect("corrupt file");

    let err = storage.load_expenses().expect_err("corrupt JSON should fail");
    assert!(matches!(err, CoreError::Storage(_)));
    assert!(
        err.to_string().starts_with("Failed to load expenses"),
        "unexpected message: {err}"
    );
}

#[test]
fn unreadable_budgets_block_add_without_persisting_the_expense() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonExpenseStorage::in_dir(dir.path()).expect("create storage");
    let paths = storage.paths().clone();
    let manager = ExpenseManager::new(
        Box::new(storage),
        Box::new(FixedClock),
        CategoryCatalog::open(),
    );
    fs::write(&paths.budgets_file, "{ not json").expect("corrupt budgets");

    let err = manager
        .add_expense(NewExpense::new("Lunch", dec!(12.00), "dining"))
        .expect_err("budgets cannot be read");
    assert!(err.to_string().starts_with("Failed to load budgets"), "{err}");
    assert_eq!(
        fs::read_to_string(&paths.expenses_file).expect("read").trim(),
        "[]"
    );

    fs::write(&paths.budgets_file, "[]").expect("repair budgets");
    let added = manager
        .add_expense(NewExpense::new("Lunch", dec!(12.00), "dining"))
        .expect("retry");
    assert_eq!(added.id(), 1);
    assert_eq!(manager.all_expenses().expect("load").len(), 1);
}

#[test]
fn amounts_survive_as_exact_decimals() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonExpenseStorage::in_dir(dir.path()).expect("create storage");
    storage.save_expenses(&[sample_expense(1)]).expect("save");

    let raw = fs::read_to_string(&storage.paths().expenses_file).expect("read");
    assert!(raw.contains("\"42.10\""), "amount stored as string: {raw}");
    assert!(raw.contains("\"2024-03-01\""), "date stored as ISO: {raw}");
}

#[test]
fn deleting_missing_expense_does_not_rewrite_file() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonExpenseStorage::in_dir(dir.path()).expect("create storage");
    let path = storage.paths().expenses_file.clone();
    let manager = ExpenseManager::new(
        Box::new(storage),
        Box::new(FixedClock),
        CategoryCatalog::open(),
    );

    let added = manager
        .add_expense(NewExpense::new("Lunch", dec!(12.00), "dining"))
        .expect("add");
    assert_eq!(added.id(), 1);
    assert_eq!(added.expense.date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    let before = fs::read_to_string(&path).expect("read");

    let err = manager.delete_expense(99).expect_err("unknown id");
    assert!(matches!(err, CoreError::ExpenseNotFound(99)));
    assert_eq!(fs::read_to_string(&path).expect("read"), before);
}
