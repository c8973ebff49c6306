use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{paths, ConfigError};

pub const DEFAULT_CATEGORIES: &[&str] = &[
    "groceries",
    "utilities",
    "transportation",
    "dining",
    "entertainment",
    "healthcare",
    "housing",
    "shopping",
    "other",
];

/// Settings that can be changed one at a time from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    CurrencySymbol,
    Categories,
    DataDir,
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigKey::CurrencySymbol => "currency-symbol",
            ConfigKey::Categories => "categories",
            ConfigKey::DataDir => "data-dir",
        })
    }
}

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,

    /// Categories accepted for expenses and budget limits. Empty accepts anything.
    #[serde(default = "Config::default_categories")]
    pub categories: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the JSON documents. Defaults to `<app home>/data`.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            categories: Self::default_categories(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_categories() -> Vec<String> {
        DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect()
    }

    /// Applies a textual value to `key`.
    ///
    /// Categories are comma separated; `default` restores the built-in list and an
    /// empty value or `none` accepts any category. An empty value or `none` also
    /// resets the data directory.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let resets = value.is_empty() || value.eq_ignore_ascii_case("none");
        match key {
            ConfigKey::CurrencySymbol => {
                if value.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key,
                        message: "currency symbol cannot be empty".into(),
                    });
                }
                self.currency_symbol = value.to_string();
            }
            ConfigKey::Categories if value.eq_ignore_ascii_case("default") => {
                self.categories = Self::default_categories();
            }
            ConfigKey::Categories if resets => self.categories.clear(),
            ConfigKey::Categories => {
                let mut categories: Vec<String> = value
                    .split(',')
                    .map(|name| name.trim().to_lowercase())
                    .filter(|name| !name.is_empty())
                    .collect();
                categories.sort();
                categories.dedup();
                self.categories = categories;
            }
            ConfigKey::DataDir if resets => self.data_dir = None,
            ConfigKey::DataDir => self.data_dir = Some(PathBuf::from(value)),
        }
        Ok(())
    }

    /// Data directory to use, honouring an explicit override first.
    pub fn resolve_data_dir(&self, base: &Path, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| paths::data_dir_in(base))
    }
}
