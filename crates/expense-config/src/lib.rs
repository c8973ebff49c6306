//! expense-config
//!
//! Persistent user preferences: currency symbol, allowed categories and the
//! data directory. Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;
pub mod paths;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, ConfigKey};
