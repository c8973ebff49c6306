use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use crate::{paths, Config, ConfigError};

/// Reads and writes `config.json`.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: &Path) -> Self {
        Self::new(paths::config_file_in(base))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the stored configuration, falling back to defaults when no file exists.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.config_path)?;
        serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
    }

    /// Replaces the stored configuration: staged next to the target, then renamed over it.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        if let Some(dir) = self.config_path.parent() {
            fs::create_dir_all(dir)?;
        }
        let staged = self.staged_path();
        fs::write(&staged, json)?;
        fs::rename(&staged, &self.config_path)?;
        Ok(())
    }

    fn staged_path(&self) -> PathBuf {
        let mut name = self
            .config_path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("config"));
        name.push(".staged");
        self.config_path.with_file_name(name)
    }
}
