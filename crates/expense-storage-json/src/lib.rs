//! expense-storage-json
//!
//! Whole-document JSON persistence for expenses and budgets.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use expense_core::{CoreError, ExpenseStorage};
use expense_domain::{Budget, Expense};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

pub const EXPENSES_FILE: &str = "expenses.json";
pub const BUDGETS_FILE: &str = "budgets.json";
const TMP_SUFFIX: &str = "tmp";

/// Locations of the two JSON documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub expenses_file: PathBuf,
    pub budgets_file: PathBuf,
}

impl StoragePaths {
    /// Standard file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            expenses_file: dir.join(EXPENSES_FILE),
            budgets_file: dir.join(BUDGETS_FILE),
        }
    }
}

/// Filesystem-backed JSON persistence. Each save rewrites the whole document.
#[derive(Debug, Clone)]
pub struct JsonExpenseStorage {
    paths: StoragePaths,
}

impl JsonExpenseStorage {
    /// Opens the documents at `paths`, creating empty ones that do not exist yet.
    pub fn new(paths: StoragePaths) -> Result<Self, CoreError> {
        let storage = Self { paths };
        storage.init_document::<Expense>(&storage.paths.expenses_file)?;
        storage.init_document::<Budget>(&storage.paths.budgets_file)?;
        Ok(storage)
    }

    /// Opens `expenses.json` and `budgets.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Result<Self, CoreError> {
        Self::new(StoragePaths::in_dir(dir))
    }

    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    fn init_document<T: Serialize>(&self, path: &Path) -> Result<(), CoreError> {
        if path.exists() {
            return Ok(());
        }
        debug!(path = %path.display(), "creating empty document");
        save_document::<T>(path, &[])
            .map_err(|err| storage_error("Failed to initialize storage", err))
    }
}

impl ExpenseStorage for JsonExpenseStorage {
    fn load_expenses(&self) -> Result<Vec<Expense>, CoreError> {
        load_document(&self.paths.expenses_file)
            .map_err(|err| storage_error("Failed to load expenses", err))
    }

    fn save_expenses(&self, expenses: &[Expense]) -> Result<(), CoreError> {
        save_document(&self.paths.expenses_file, expenses)
            .map_err(|err| storage_error("Failed to save expenses", err))
    }

    fn load_budgets(&self) -> Result<Vec<Budget>, CoreError> {
        load_document(&self.paths.budgets_file)
            .map_err(|err| storage_error("Failed to load budgets", err))
    }

    fn save_budgets(&self, budgets: &[Budget]) -> Result<(), CoreError> {
        save_document(&self.paths.budgets_file, budgets)
            .map_err(|err| storage_error("Failed to save budgets", err))
    }
}

#[derive(Debug, Error)]
enum DocumentError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

fn storage_error(context: &str, err: DocumentError) -> CoreError {
    CoreError::Storage(format!("{context}: {err}"))
}

fn load_document<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DocumentError> {
    let data = fs::read_to_string(path)?;
    let items: Vec<T> = serde_json::from_str(&data)?;
    debug!(path = %path.display(), count = items.len(), "document loaded");
    Ok(items)
}

/// Writes the whole list to a temporary sibling, then renames it over `path`.
fn save_document<T: Serialize>(path: &Path, items: &[T]) -> Result<(), DocumentError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(items)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), count = items.len(), "document saved");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), std::io::Error> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
