//! Configuration types for staffdesk.
//!
//! # Example
//!
//! ```rust
//! use staffdesk::config::{DatabaseConfig, StaffdeskConfig};
//!
//! // Use defaults
//! let config = StaffdeskConfig::default();
//!
//! // Or read a TOML document
//! let config = StaffdeskConfig::from_toml_str(
//!     r#"
//!     [database]
//!     url = "sqlite://office.db"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.database.url, "sqlite://office.db");
//! assert_eq!(config.database.max_connections, 5);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::AppError;

/// Main configuration struct.
///
/// A configuration file must contain a `[database]` table with at least
/// a `url` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffdeskConfig {
    pub database: DatabaseConfig,
}

impl StaffdeskConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// An in-memory database on a single connection; every pool connection
    /// to `sqlite::memory:` would otherwise see its own empty database.
    pub fn development() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_owned(),
                max_connections: 1,
            },
        }
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the document is malformed or the
    /// `[database]` table or its `url` key is missing.
    pub fn from_toml_str(s: &str) -> Result<Self, AppError> {
        toml::from_str(s).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the file does not exist, cannot be
    /// read, or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        let config = Self::from_toml_str(&contents)?;

        log::debug!(
            target: "staffdesk",
            "msg=\"configuration loaded\", path=\"{}\"",
            path.display()
        );

        Ok(config)
    }
}

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL, e.g. `sqlite://staffdesk.db`.
    pub url: String,

    /// Upper bound on pooled connections.
    ///
    /// Default: 5
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://staffdesk.db".to_owned(),
            max_connections: default_max_connections(),
        }
    }
}
