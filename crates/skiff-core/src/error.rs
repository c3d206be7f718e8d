//! Error types for skiff-core

use thiserror::Error;

/// Core error type for Skiff
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: Migrations directory not found or unreadable
    #[error("[E003] Cannot read migrations directory {path}: {message}")]
    MigrationsDirUnreadable { path: String, message: String },

    /// E004: Invalid migration label
    #[error("[E004] Invalid migration name '{label}': {reason}")]
    InvalidLabel { label: String, reason: String },

    /// E005: SQL content appears before the first section marker
    #[error("[E005] Line {line_number} appears before the first '-- +goose Up' or '-- +goose Down' marker")]
    ContentBeforeMarker { line_number: usize },

    /// IO error with file path context
    #[error("IO error on {path}: {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
