//! Configuration types and parsing for skiff.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional project configuration file
pub const CONFIG_FILE_NAME: &str = "skiff.yml";

/// Project configuration from skiff.yml
///
/// Every field has a default matching the tool's built-in constants, so a
/// project without a skiff.yml behaves identically to one with an empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Directory containing migration SQL files
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file, or ":memory:"
    #[serde(default = "default_database_path")]
    pub path: String,
}

fn default_migrations_dir() -> String {
    "migrations".to_string()
}

fn default_database_path() -> String {
    "migrate.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            migrations_dir: default_migrations_dir(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

impl Config {
    /// Load configuration from a specific file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    ///
    /// Looks for skiff.yml; a missing file yields the defaults.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join(CONFIG_FILE_NAME);

        if yml_path.exists() {
            Self::load(&yml_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.database.path.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "database.path cannot be empty".to_string(),
            });
        }
        if self.migrations_dir.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "migrations_dir cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Migrations directory resolved against the project root
    pub fn migrations_dir_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.migrations_dir)
    }

    /// Database path resolved against the project root
    ///
    /// ":memory:" is passed through untouched.
    pub fn database_path_absolute(&self, root: &Path) -> PathBuf {
        if self.database.path == ":memory:" {
            PathBuf::from(&self.database.path)
        } else {
            root.join(&self.database.path)
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
