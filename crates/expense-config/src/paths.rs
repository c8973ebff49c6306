use std::{
    env,
    path::{Path, PathBuf},
};

use dirs::home_dir;

pub const HOME_ENV: &str = "EXPENSE_TRACKER_HOME";
const DEFAULT_DIR_NAME: &str = ".expense_tracker";
const DATA_DIR: &str = "data";
const CONFIG_FILE: &str = "config.json";

/// Returns the application directory, defaulting to `~/.expense_tracker`.
pub fn app_home() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Default directory holding the expense and budget documents.
pub fn data_dir_in(base: &Path) -> PathBuf {
    base.join(DATA_DIR)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
